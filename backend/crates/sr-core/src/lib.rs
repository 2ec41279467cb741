pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::feedback::{Feedback, FeedbackWithReviewer};
pub use models::snippet::{DEFAULT_LANGUAGE, Snippet};
pub use models::user::User;
pub use validation::{
    validate_email, validate_feedback_text, validate_password, validate_snippet_content,
};
