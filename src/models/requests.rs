use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank the roster against a free-text query
///
/// An omitted `limit` falls back to the configured default.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    pub query: String,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Query parameters for the profile directory listing
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
}

/// Request to the assistant proxy
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssistantRequest {
    #[validate(length(min = 1))]
    pub prompt: String,
}
