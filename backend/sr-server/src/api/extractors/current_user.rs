//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use sr_auth::bearer_token;
use sr_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// The authenticated caller, resolved from the `Authorization` header
///
/// Verifies the bearer token, then confirms the subject still exists.
/// A valid token whose user row has been deleted is rejected with 401.
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok());

            let token = bearer_token(header).inspect_err(|e| {
                log::warn!("Rejected request with bad authorization header: {}", e);
            })?;

            let user_id = state.tokens.verify(token).inspect_err(|e| {
                log::warn!("Rejected request with invalid token: {}", e);
            })?;

            // The token may outlive its user; re-check existence on every request
            let repo = UserRepository::new(state.pool.clone());
            let user = repo.find_by_id(user_id).await?.ok_or_else(|| {
                log::warn!("Token subject {} no longer exists", user_id);
                ApiError::UnknownIdentity {
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            Ok(CurrentUser {
                id: user.id,
                email: user.email,
                created_at: user.created_at,
            })
        }
    }
}
