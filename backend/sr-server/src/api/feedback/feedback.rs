//! Feedback REST API handlers

use crate::{ApiResult, AppState, CurrentUser, FeedbackResponse, SubmitFeedbackRequest};

use sr_review::FeedbackService;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/snippets/:id/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(snippet_id): Path<String>,
    Json(req): Json<SubmitFeedbackRequest>,
) -> ApiResult<(StatusCode, Json<FeedbackResponse>)> {
    let snippet_uuid = Uuid::parse_str(&snippet_id)?;

    let service = FeedbackService::new(state.pool.clone());
    let feedback = service.submit(user.id, snippet_uuid, &req.text).await?;

    log::info!(
        "Reviewer {} left feedback {} on snippet {}",
        user.id,
        feedback.id,
        snippet_id
    );

    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            feedback: feedback.into(),
        }),
    ))
}
