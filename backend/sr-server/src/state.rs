use sr_auth::TokenService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
///
/// Repositories are constructed per request from the pool; the token
/// service is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
}
