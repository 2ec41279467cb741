use crate::FeedbackDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: FeedbackDto,
}
