use crate::core::{
    scoring::{match_percent, raw_score},
    tokenize::tokenize_query,
};
use crate::models::{InfluencerProfile, ScoredProfile, ScoringWeights};

/// Match percentages at or below this value are treated as noise
pub const NOISE_THRESHOLD: u8 = 10;

/// Result of one scoring pass over the roster
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredProfile>,
    pub total_profiles: usize,
}

/// Match scoring engine
///
/// A pure function of (query, roster, limit): tokenize the query, score
/// every profile, drop noise, rank, and cap. The roster is read-only and
/// the engine holds no per-call state, so concurrent invocations are safe
/// by construction.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: ScoringWeights,
    noise_threshold: u8,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights, noise_threshold: u8) -> Self {
        Self {
            weights,
            noise_threshold,
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            noise_threshold: NOISE_THRESHOLD,
        }
    }

    /// Rank the roster against a free-text query
    ///
    /// # Arguments
    /// * `query` - free-text campaign description
    /// * `profiles` - the full roster, in store order
    /// * `limit` - maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with matches sorted descending by match percentage.
    /// Ties keep store order (the sort is stable), so output is fully
    /// deterministic. An empty or all-stop-word query yields zero matches.
    pub fn find_matches(
        &self,
        query: &str,
        profiles: &[InfluencerProfile],
        limit: usize,
    ) -> MatchResult {
        let total_profiles = profiles.len();

        let tokens = tokenize_query(query);
        if tokens.is_empty() {
            return MatchResult {
                matches: Vec::new(),
                total_profiles,
            };
        }

        let mut matches: Vec<ScoredProfile> = profiles
            .iter()
            .filter_map(|profile| {
                let raw = raw_score(profile, &tokens, &self.weights);
                let percent = match_percent(raw, tokens.len());

                if percent > self.noise_threshold {
                    Some(ScoredProfile {
                        profile: profile.clone(),
                        match_percent: percent,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
        matches.truncate(limit);

        MatchResult {
            matches,
            total_profiles,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
