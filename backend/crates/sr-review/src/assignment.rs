//! Review assignment: hand out somebody else's snippet, uniformly at random.

use crate::Result as ReviewErrorResult;

use sr_core::Snippet;
use sr_db::SnippetRepository;

use rand::Rng;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Selects one snippet for review, excluding the requester's own.
///
/// Stateless across calls: repeated requests may hand out the same snippet
/// again. `None` means the eligible pool is empty, which is an expected
/// outcome rather than a fault.
pub struct ReviewAssignmentEngine {
    snippets: SnippetRepository,
}

impl ReviewAssignmentEngine {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            snippets: SnippetRepository::new(pool),
        }
    }

    /// Pick a snippet not owned by `requester_id`, each eligible snippet
    /// with equal probability.
    pub async fn pick_for_review(&self, requester_id: Uuid) -> ReviewErrorResult<Option<Snippet>> {
        let eligible = self.snippets.count_not_owned_by(requester_id).await?;
        if eligible == 0 {
            return Ok(None);
        }

        let offset = rand::rng().random_range(0..eligible);

        // Count and fetch are not transactional against concurrent writes;
        // a snippet gone by fetch time reads as an empty pick, not a fault.
        let picked = self
            .snippets
            .find_not_owned_by_offset(requester_id, offset)
            .await?;

        if picked.is_none() {
            log::debug!(
                "eligible snippet at offset {} disappeared between count and fetch",
                offset
            );
        }

        Ok(picked)
    }
}
