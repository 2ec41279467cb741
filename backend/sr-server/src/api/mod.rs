pub mod auth;
pub mod error;
pub mod extractors;
pub mod feedback;
pub mod snippets;
