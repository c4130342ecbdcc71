use serde::{Deserialize, Serialize};

/// Validated request fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub issue_key: String,
    pub transcript_field: String,
}

/// A distinct transcript word with its difficulty (`7 - zipf`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TranslationOutcome {
    Translated(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedWord {
    pub word: String,
    pub outcome: TranslationOutcome,
}

/// The `{statusCode, body}` shape returned to API Gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,
    pub body: String,
}
