use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Language tag applied when the submitter does not provide one
pub const DEFAULT_LANGUAGE: &str = "plaintext";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub id: Uuid,

    /// Owning user; immutable after creation
    pub owner_id: Uuid,

    pub content: String,

    /// Free-form language tag
    pub language: String,

    pub created_at: DateTime<Utc>,
}

impl Snippet {
    pub fn new(owner_id: Uuid, content: String, language: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            content,
            language: language.unwrap_or_else(|| String::from(DEFAULT_LANGUAGE)),
            created_at: Utc::now(),
        }
    }
}
