//! Registration and login REST API handlers

use crate::{ApiError, ApiResult, AppState, LoginRequest, LoginResponse, RegisterRequest, UserResponse};

use sr_auth::{hash_password, verify_password};
use sr_core::{User, validate_email, validate_password};
use sr_db::{DbError, UserRepository};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    // 1. Validate inputs before touching the database
    validate_email(&req.email)?;
    validate_password(&req.password)?;

    // 2. Hash the password; the plaintext is dropped here
    let password_hash = hash_password(&req.password)?;

    let user = User::new(req.email, password_hash);

    // 3. Persist; a duplicate email surfaces as a unique violation
    let repo = UserRepository::new(state.pool.clone());
    repo.create(&user).await.map_err(|e| match e {
        DbError::UniqueViolation { .. } => ApiError::Conflict {
            message: "email already registered".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
        other => ApiError::from(other),
    })?;

    log::info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// POST /api/v1/auth/login
///
/// Unknown email and wrong password produce the same response so
/// callers cannot probe which addresses are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if req.email.is_empty() {
        return Err(ApiError::Validation {
            message: "email must not be empty".to_string(),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if req.password.is_empty() {
        return Err(ApiError::Validation {
            message: "password must not be empty".to_string(),
            field: Some("password".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(invalid_credentials());
    }

    let token = state.tokens.issue(user.id)?;

    log::info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized {
        message: "invalid email or password".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
