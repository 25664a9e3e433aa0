// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod tokenize;

pub use filters::{filter_directory, matches_directory_filter};
pub use matcher::{MatchEngine, MatchResult, NOISE_THRESHOLD};
pub use scoring::{match_percent, raw_score, TOKEN_SCALE};
pub use tokenize::tokenize_query;
