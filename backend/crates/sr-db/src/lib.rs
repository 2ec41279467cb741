pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::feedback_repository::FeedbackRepository;
pub use repositories::snippet_repository::SnippetRepository;
pub use repositories::user_repository::UserRepository;
