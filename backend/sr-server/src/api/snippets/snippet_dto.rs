use sr_core::Snippet;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SnippetDto {
    pub id: String,
    pub owner_id: String,
    pub content: String,
    pub language: String,
    pub created_at: i64,
}

impl From<Snippet> for SnippetDto {
    fn from(s: Snippet) -> Self {
        Self {
            id: s.id.to_string(),
            owner_id: s.owner_id.to_string(),
            content: s.content,
            language: s.language,
            created_at: s.created_at.timestamp(),
        }
    }
}
