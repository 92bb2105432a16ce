use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout accepted by the result endpoint: UTC, no fractional seconds.
pub const RESULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimTaskRequest {
    pub task_id: u64,
    pub input_hash: String,
    pub requester: String,
    pub model: String,
    pub fee: String,
    pub chain_id: u64,
    pub tx_hash: String,
    pub block_number: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimTaskResponse {
    pub task_id: u64,
    pub status: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputPayload {
    pub text: String,
    pub mode: String,
    #[serde(default)]
    pub include_grammar: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputResponse {
    pub input_hash: String,
    pub input_payload: InputPayload,
    pub prepared_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
    pub include_grammar: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub english_grammar: Option<String>,
    pub japanese_text: Option<String>,
    pub hiragana_pronunciation: Option<String>,
    pub japanese_grammar: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub original_text: String,
    pub translated_text: String,
    pub english_grammar: Option<String>,
    pub japanese_text: Option<String>,
    pub hiragana_pronunciation: Option<String>,
    pub japanese_grammar: Option<String>,
    pub timestamp: String,
}

impl From<TranslationResponse> for ResultPayload {
    fn from(translation: TranslationResponse) -> Self {
        Self {
            original_text: translation.original_text,
            translated_text: translation.translated_text,
            english_grammar: translation.english_grammar,
            japanese_text: translation.japanese_text,
            hiragana_pronunciation: translation.hiragana_pronunciation,
            japanese_grammar: translation.japanese_grammar,
            timestamp: translation.timestamp.format(RESULT_TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResultRequest {
    pub result_payload: ResultPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResultResponse {
    pub task_id: u64,
    pub result_hash: String,
    pub status: String,
    pub completed_at: String,
}

/// Error body returned with any non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
