use crate::SnippetDto;

use sr_core::FeedbackWithReviewer;
use sr_review::SnippetWithFeedback;

use serde::Serialize;

/// One feedback entry in the owner's submission view, with the
/// reviewer's email resolved
#[derive(Debug, Serialize)]
pub struct SubmissionFeedbackDto {
    pub id: String,
    pub reviewer_id: String,
    pub reviewer_email: String,
    pub text: String,
    pub created_at: i64,
}

impl From<FeedbackWithReviewer> for SubmissionFeedbackDto {
    fn from(f: FeedbackWithReviewer) -> Self {
        Self {
            id: f.id.to_string(),
            reviewer_id: f.reviewer_id.to_string(),
            reviewer_email: f.reviewer_email,
            text: f.text,
            created_at: f.created_at.timestamp(),
        }
    }
}

/// A snippet the caller owns, with all feedback received so far
#[derive(Debug, Serialize)]
pub struct SubmissionDto {
    pub snippet: SnippetDto,
    pub feedback: Vec<SubmissionFeedbackDto>,
}

impl From<SnippetWithFeedback> for SubmissionDto {
    fn from(s: SnippetWithFeedback) -> Self {
        Self {
            snippet: s.snippet.into(),
            feedback: s.feedback.into_iter().map(Into::into).collect(),
        }
    }
}
