use sr_core::{Snippet, User};
use sr_db::{SnippetRepository, UserRepository};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../sr-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_user(pool: &SqlitePool, email: &str) -> User {
    let user = User::new(email.to_string(), format!("$argon2$test${}", email));
    UserRepository::new(pool.clone()).create(&user).await.unwrap();
    user
}

pub async fn create_snippet(pool: &SqlitePool, owner_id: Uuid, content: &str) -> Snippet {
    let snippet = Snippet::new(owner_id, content.to_string(), Some("rust".to_string()));
    SnippetRepository::new(pool.clone())
        .create(&snippet)
        .await
        .unwrap();
    snippet
}
