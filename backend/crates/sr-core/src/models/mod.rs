pub mod feedback;
pub mod snippet;
pub mod user;
