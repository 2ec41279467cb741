pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    feedback::{
        feedback::submit_feedback, feedback_dto::FeedbackDto, feedback_response::FeedbackResponse,
        submit_feedback_request::SubmitFeedbackRequest,
    },
    snippets::{
        create_snippet_request::CreateSnippetRequest,
        snippet_dto::SnippetDto,
        snippet_response::SnippetResponse,
        snippets::{create_snippet, list_my_submissions, pick_for_review},
        submission_dto::{SubmissionDto, SubmissionFeedbackDto},
        submission_list_response::SubmissionListResponse,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
