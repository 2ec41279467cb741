use sr_core::{Feedback, Snippet, User};

use uuid::Uuid;

pub fn test_user(email: &str) -> User {
    // Not a real hash; repository tests never verify passwords
    User::new(email.to_string(), format!("$argon2$test${}", email))
}

pub fn test_snippet(owner_id: Uuid, content: &str) -> Snippet {
    Snippet::new(owner_id, content.to_string(), Some("rust".to_string()))
}

pub fn test_feedback(snippet_id: Uuid, reviewer_id: Uuid, text: &str) -> Feedback {
    Feedback::new(snippet_id, reviewer_id, text.to_string())
}
