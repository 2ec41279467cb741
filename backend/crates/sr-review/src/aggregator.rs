//! Submission aggregation: a user's snippets joined with all feedback on them.

use crate::Result as ReviewErrorResult;

use sr_core::{FeedbackWithReviewer, Snippet};
use sr_db::{FeedbackRepository, SnippetRepository};

use std::collections::HashMap;

use sqlx::SqlitePool;
use uuid::Uuid;

/// One owned snippet with every feedback entry referencing it.
/// Snippets without feedback carry an empty group, never a missing one.
#[derive(Debug, Clone)]
pub struct SnippetWithFeedback {
    pub snippet: Snippet,
    pub feedback: Vec<FeedbackWithReviewer>,
}

pub struct SubmissionAggregator {
    snippets: SnippetRepository,
    feedback: FeedbackRepository,
}

impl SubmissionAggregator {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            snippets: SnippetRepository::new(pool.clone()),
            feedback: FeedbackRepository::new(pool),
        }
    }

    /// All snippets owned by `owner_id` in creation order, each with its
    /// feedback group. Feedback is fetched in one batched lookup over the
    /// whole snippet set, not per snippet.
    pub async fn list_own_with_feedback(
        &self,
        owner_id: Uuid,
    ) -> ReviewErrorResult<Vec<SnippetWithFeedback>> {
        let owned = self.snippets.find_by_owner(owner_id).await?;

        let snippet_ids: Vec<Uuid> = owned.iter().map(|s| s.id).collect();
        let entries = self
            .feedback
            .find_with_reviewer_by_snippet_ids(&snippet_ids)
            .await?;

        let mut groups: HashMap<Uuid, Vec<FeedbackWithReviewer>> = HashMap::new();
        for entry in entries {
            groups.entry(entry.snippet_id).or_default().push(entry);
        }

        Ok(owned
            .into_iter()
            .map(|snippet| {
                let feedback = groups.remove(&snippet.id).unwrap_or_default();
                SnippetWithFeedback { snippet, feedback }
            })
            .collect())
    }
}
