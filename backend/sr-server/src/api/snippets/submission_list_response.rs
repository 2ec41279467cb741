use crate::SubmissionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<SubmissionDto>,
}
