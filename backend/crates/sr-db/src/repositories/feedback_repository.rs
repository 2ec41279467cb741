use crate::Result as DbErrorResult;

use sr_core::{Feedback, FeedbackWithReviewer};

use chrono::DateTime;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

pub struct FeedbackRepository {
    pool: SqlitePool,
}

impl FeedbackRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, feedback: &Feedback) -> DbErrorResult<()> {
        let id = feedback.id.to_string();
        let snippet_id = feedback.snippet_id.to_string();
        let reviewer_id = feedback.reviewer_id.to_string();
        let created_at = feedback.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO feedback (id, snippet_id, reviewer_id, text, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(snippet_id)
        .bind(reviewer_id)
        .bind(&feedback.text)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Batched lookup of all feedback targeting any of `snippet_ids`, joined
    /// with each reviewer's email. One query for the whole id set.
    pub async fn find_with_reviewer_by_snippet_ids(
        &self,
        snippet_ids: &[Uuid],
    ) -> DbErrorResult<Vec<FeedbackWithReviewer>> {
        if snippet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
              SELECT f.id, f.snippet_id, f.reviewer_id, f.text, f.created_at,
                     u.email AS reviewer_email
              FROM feedback f
              JOIN users u ON u.id = f.reviewer_id
              WHERE f.snippet_id IN (
              "#,
        );

        let mut separated = builder.separated(", ");
        for snippet_id in snippet_ids {
            separated.push_bind(snippet_id.to_string());
        }
        builder.push(") ORDER BY f.created_at ASC, f.id ASC");

        let rows = builder.build().fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|r| FeedbackWithReviewer {
                id: Uuid::parse_str(&r.get::<String, _>("id")).unwrap(),
                snippet_id: Uuid::parse_str(&r.get::<String, _>("snippet_id")).unwrap(),
                reviewer_id: Uuid::parse_str(&r.get::<String, _>("reviewer_id")).unwrap(),
                reviewer_email: r.get("reviewer_email"),
                text: r.get("text"),
                created_at: DateTime::from_timestamp(r.get("created_at"), 0).unwrap(),
            })
            .collect())
    }
}
