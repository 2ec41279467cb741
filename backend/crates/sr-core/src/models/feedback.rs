use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Peer feedback on a snippet.
///
/// Invariant: `reviewer_id` is never the snippet's owner. Enforced at
/// creation time by the feedback service, never relaxed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub snippet_id: Uuid,
    pub reviewer_id: Uuid,

    pub text: String,

    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(snippet_id: Uuid, reviewer_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            snippet_id,
            reviewer_id,
            text,
            created_at: Utc::now(),
        }
    }
}

/// Read model for the submission view: feedback joined with the
/// reviewer's email so owners can see who reviewed them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackWithReviewer {
    pub id: Uuid,
    pub snippet_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewer_email: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
