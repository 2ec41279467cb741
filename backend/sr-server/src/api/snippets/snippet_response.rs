use crate::SnippetDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SnippetResponse {
    pub snippet: SnippetDto,
}
