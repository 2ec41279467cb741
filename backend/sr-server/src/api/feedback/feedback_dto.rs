use sr_core::Feedback;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeedbackDto {
    pub id: String,
    pub snippet_id: String,
    pub reviewer_id: String,
    pub text: String,
    pub created_at: i64,
}

impl From<Feedback> for FeedbackDto {
    fn from(f: Feedback) -> Self {
        Self {
            id: f.id.to_string(),
            snippet_id: f.snippet_id.to_string(),
            reviewer_id: f.reviewer_id.to_string(),
            text: f.text,
            created_at: f.created_at.timestamp(),
        }
    }
}
