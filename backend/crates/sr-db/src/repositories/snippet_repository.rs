use crate::Result as DbErrorResult;

use sr_core::Snippet;

use chrono::DateTime;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

pub struct SnippetRepository {
    pool: SqlitePool,
}

impl SnippetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, snippet: &Snippet) -> DbErrorResult<()> {
        let id = snippet.id.to_string();
        let owner_id = snippet.owner_id.to_string();
        let created_at = snippet.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO snippets (id, owner_id, content, language, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(&snippet.content)
        .bind(&snippet.language)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Snippet>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, owner_id, content, language, created_at
              FROM snippets
              WHERE id = ?
              "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| row_to_snippet(&r)))
    }

    /// Number of snippets eligible for review by someone other than `owner_id`
    pub async fn count_not_owned_by(&self, owner_id: Uuid) -> DbErrorResult<i64> {
        let owner_str = owner_id.to_string();

        let count: i64 = sqlx::query_scalar(
            r#"
              SELECT COUNT(*)
              FROM snippets
              WHERE owner_id != ?
              "#,
        )
        .bind(owner_str)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Fetch the snippet at `offset` within the eligible set, under a stable
    /// ordering. Paired with `count_not_owned_by` this gives a uniform
    /// random pick regardless of storage order.
    pub async fn find_not_owned_by_offset(
        &self,
        owner_id: Uuid,
        offset: i64,
    ) -> DbErrorResult<Option<Snippet>> {
        let owner_str = owner_id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, owner_id, content, language, created_at
              FROM snippets
              WHERE owner_id != ?
              ORDER BY created_at ASC, id ASC
              LIMIT 1 OFFSET ?
              "#,
        )
        .bind(owner_str)
        .bind(offset)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| row_to_snippet(&r)))
    }

    /// All snippets owned by `owner_id`, in creation order
    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Vec<Snippet>> {
        let owner_str = owner_id.to_string();

        let rows = sqlx::query(
            r#"
              SELECT id, owner_id, content, language, created_at
              FROM snippets
              WHERE owner_id = ?
              ORDER BY created_at ASC, id ASC
              "#,
        )
        .bind(owner_str)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_snippet).collect())
    }
}

fn row_to_snippet(row: &SqliteRow) -> Snippet {
    Snippet {
        id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
        owner_id: Uuid::parse_str(&row.get::<String, _>("owner_id")).unwrap(),
        content: row.get("content"),
        language: row.get("language"),
        created_at: DateTime::from_timestamp(row.get("created_at"), 0).unwrap(),
    }
}
