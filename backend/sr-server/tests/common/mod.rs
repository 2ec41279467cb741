#![allow(dead_code)]

//! Test infrastructure for sr-server API tests

use sr_auth::TokenService;
use sr_server::{AppState, build_router};

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// HS256 requires at least 32 bytes
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

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

    sqlx::migrate!("../crates/sr-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_state() -> AppState {
    create_test_state_with_ttl(3600).await
}

/// Create AppState with a custom token lifetime
pub async fn create_test_state_with_ttl(ttl_secs: u64) -> AppState {
    AppState {
        pool: create_test_pool().await,
        tokens: Arc::new(TokenService::with_hs256(TEST_JWT_SECRET, ttl_secs)),
    }
}

/// Create a TestServer with its backing state
pub async fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state().await;
    let server = TestServer::new(build_router(state.clone())).expect("Failed to start test server");
    (server, state)
}

/// Register a user and log in, returning (token, user_id)
pub async fn register_and_login(server: &TestServer, email: &str, password: &str) -> (String, String) {
    let register = server
        .post("/api/v1/auth/register")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(register.status_code(), 201, "registration failed: {}", register.text());

    let login = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(login.status_code(), 200, "login failed: {}", login.text());

    let body: serde_json::Value = login.json();
    let token = body["token"].as_str().expect("missing token").to_string();
    let user_id = body["user"]["id"].as_str().expect("missing user id").to_string();

    (token, user_id)
}

/// Submit a snippet as the given user, returning the snippet id
pub async fn submit_snippet(server: &TestServer, token: &str, content: &str) -> String {
    let response = server
        .post("/api/v1/snippets")
        .authorization_bearer(token)
        .json(&json!({ "content": content }))
        .await;
    assert_eq!(response.status_code(), 201, "snippet submission failed: {}", response.text());

    let body: serde_json::Value = response.json();
    body["snippet"]["id"].as_str().expect("missing snippet id").to_string()
}
