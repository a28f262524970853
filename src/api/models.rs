use serde::{Deserialize, Serialize};

/// Envelope shared by the provider's v4 API responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// `result` payload of a record fetch.
#[derive(Debug, Deserialize)]
pub struct RecordResult {
    pub content: String,
    #[serde(default)]
    pub proxied: bool,
    pub ttl: u32,
}

/// `result` payload of a record update.
#[derive(Debug, Deserialize)]
pub struct UpdateResult {
    pub content: String,
}

/// Full replacement body for a record PUT.
#[derive(Debug, Serialize)]
pub struct UpdateRecordBody<'a> {
    pub r#type: &'a str,
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
    pub proxied: bool,
}

/// Current state of a record, flattened out of the API envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSnapshot {
    pub content: String,
    pub proxied: bool,
    pub ttl: u32,
    pub success: bool,
}

/// Result of a record replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub content: String,
    pub success: bool,
}
