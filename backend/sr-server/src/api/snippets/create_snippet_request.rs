use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSnippetRequest {
    pub content: String,
    /// Free-form language tag; defaults to "plaintext" when omitted
    pub language: Option<String>,
}
