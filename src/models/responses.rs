use crate::models::domain::{InfluencerProfile, ScoredProfile};
use serde::{Deserialize, Serialize};

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredProfile>,
    #[serde(rename = "totalProfiles")]
    pub total_profiles: usize,
}

/// Response for the profile directory endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryResponse {
    pub profiles: Vec<InfluencerProfile>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "rosterSize")]
    pub roster_size: usize,
}

/// Response from the assistant proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub reply: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
