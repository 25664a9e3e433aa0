//! InfluMatch Algo - match scoring service for the InfluMatch creator marketplace
//!
//! This library ranks an immutable in-memory roster of influencer profiles
//! against free-text campaign queries using a keyword scoring engine, and
//! exposes directory filtering plus an optional assistant proxy around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{tokenize_query, MatchEngine, MatchResult};
pub use models::{
    FindMatchesRequest, FindMatchesResponse, InfluencerProfile, ProfileFilter, ScoredProfile,
    ScoringWeights,
};
pub use services::ProfileStore;
