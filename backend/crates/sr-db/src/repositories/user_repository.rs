use crate::Result as DbErrorResult;

use sr_core::User;

use chrono::DateTime;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO users (id, email, password_hash, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, password_hash, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| row_to_user(&r)))
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, email, password_hash, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| row_to_user(&r)))
    }
}

fn row_to_user(row: &SqliteRow) -> User {
    User {
        id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: DateTime::from_timestamp(row.get("created_at"), 0).unwrap(),
    }
}
