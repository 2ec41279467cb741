//! Snippet REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateSnippetRequest, CurrentUser, SnippetResponse,
    SubmissionDto, SubmissionListResponse,
};

use sr_core::{Snippet, validate_snippet_content};
use sr_db::SnippetRepository;
use sr_review::{ReviewAssignmentEngine, SubmissionAggregator};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /api/v1/snippets
pub async fn create_snippet(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateSnippetRequest>,
) -> ApiResult<(StatusCode, Json<SnippetResponse>)> {
    validate_snippet_content(&req.content)?;

    let snippet = Snippet::new(user.id, req.content, req.language);

    let repo = SnippetRepository::new(state.pool.clone());
    repo.create(&snippet).await?;

    log::info!("User {} submitted snippet {}", user.id, snippet.id);

    Ok((
        StatusCode::CREATED,
        Json(SnippetResponse {
            snippet: snippet.into(),
        }),
    ))
}

/// GET /api/v1/snippets/review
///
/// Picks one snippet the caller does not own, uniformly at random.
/// 404 means nothing is eligible right now, not a client mistake.
pub async fn pick_for_review(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<SnippetResponse>> {
    let engine = ReviewAssignmentEngine::new(state.pool.clone());

    let snippet = engine
        .pick_for_review(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "no snippets available for review".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::debug!("Assigned snippet {} to reviewer {}", snippet.id, user.id);

    Ok(Json(SnippetResponse {
        snippet: snippet.into(),
    }))
}

/// GET /api/v1/snippets/mine
pub async fn list_my_submissions(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<SubmissionListResponse>> {
    let aggregator = SubmissionAggregator::new(state.pool.clone());
    let submissions = aggregator.list_own_with_feedback(user.id).await?;

    Ok(Json(SubmissionListResponse {
        submissions: submissions.into_iter().map(SubmissionDto::from).collect(),
    }))
}
