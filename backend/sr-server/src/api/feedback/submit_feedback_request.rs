use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub text: String,
}
