pub mod feedback_repository;
pub mod snippet_repository;
pub mod user_repository;
