//! Feedback submission with the self-review guard.

use crate::{ReviewError, Result as ReviewErrorResult};

use sr_core::{Feedback, validate_feedback_text};
use sr_db::{FeedbackRepository, SnippetRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct FeedbackService {
    snippets: SnippetRepository,
    feedback: FeedbackRepository,
}

impl FeedbackService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            snippets: SnippetRepository::new(pool.clone()),
            feedback: FeedbackRepository::new(pool),
        }
    }

    /// Persist feedback from `reviewer_id` on `snippet_id`.
    ///
    /// Checks run in order: input validation, snippet existence, ownership.
    /// A reviewer may never create feedback on their own snippet.
    pub async fn submit(
        &self,
        reviewer_id: Uuid,
        snippet_id: Uuid,
        text: &str,
    ) -> ReviewErrorResult<Feedback> {
        validate_feedback_text(text)?;

        let snippet = self.snippets.find_by_id(snippet_id).await?.ok_or_else(|| {
            ReviewError::NotFound {
                message: format!("Snippet {} not found", snippet_id),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        if snippet.owner_id == reviewer_id {
            return Err(ReviewError::Forbidden {
                message: "cannot review your own snippet".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let feedback = Feedback::new(snippet_id, reviewer_id, text.to_string());
        self.feedback.create(&feedback).await?;

        Ok(feedback)
    }
}
