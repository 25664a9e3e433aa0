// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    format_followers, InfluencerProfile, ProfileFilter, ScoredProfile, ScoringWeights, SocialLink,
};
pub use requests::{AssistantRequest, DirectoryQuery, FindMatchesRequest};
pub use responses::{
    AssistantResponse, DirectoryResponse, ErrorResponse, FindMatchesResponse, HealthResponse,
};
