use crate::models::{InfluencerProfile, ScoringWeights};

/// Per-token scale used to normalize raw scores to a percentage.
///
/// This is the product's mid-range reference point, not the true per-token
/// maximum (a token hitting niche, city, and full text at once earns 20),
/// so raw percentages can exceed 100 before the clamp. The clamp is part
/// of the contract; do not change this constant without product sign-off.
pub const TOKEN_SCALE: u32 = 5;

/// Accumulate the raw match score for one profile against the query tokens
///
/// Each token is tested against three field categories in priority order:
/// niche (+10), city (+8), and the full-text blob of name + niche + city +
/// bio (+2). The tests are independent, so one token can earn credit from
/// more than one category, but at most once per category regardless of how
/// often it occurs inside a field.
pub fn raw_score(profile: &InfluencerProfile, tokens: &[String], weights: &ScoringWeights) -> u32 {
    let niche = profile.niche.to_lowercase();
    let city = profile.city.to_lowercase();
    let full_text = profile.search_text();

    let mut score = 0;
    for token in tokens {
        if niche.contains(token.as_str()) {
            score += weights.niche;
        }
        if city.contains(token.as_str()) {
            score += weights.city;
        }
        if full_text.contains(token.as_str()) {
            score += weights.full_text;
        }
    }
    score
}

/// Convert a raw score into a 0-100 match percentage
///
/// `min(round(raw / (token_count * TOKEN_SCALE) * 100), 100)`
#[inline]
pub fn match_percent(raw: u32, token_count: usize) -> u8 {
    if token_count == 0 {
        return 0;
    }

    let scaled = (raw as f64 / (token_count as u32 * TOKEN_SCALE) as f64) * 100.0;
    scaled.round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(name: &str, niche: &str, city: &str, bio: &str) -> InfluencerProfile {
        InfluencerProfile {
            id: "test_profile".to_string(),
            name: name.to_string(),
            avatar: String::new(),
            city: city.to_string(),
            niche: niche.to_string(),
            followers: 100_000,
            rating: 4.5,
            bio: bio.to_string(),
            languages: vec!["English".to_string()],
            audience_type: "Gen Z".to_string(),
            region: "South India".to_string(),
            social_links: vec![],
            past_brands: vec![],
        }
    }

    #[test]
    fn test_raw_score_accumulates_per_field() {
        let profile = create_test_profile(
            "Pavan Hari",
            "Fitness",
            "Hyderabad",
            "Fitness enthusiast and content creator.",
        );
        let tokens = vec![
            "fitness".to_string(),
            "influencers".to_string(),
            "hyderabad".to_string(),
        ];

        // "fitness": niche (+10) + full text (+2)
        // "influencers": no hits
        // "hyderabad": city (+8) + full text (+2)
        let score = raw_score(&profile, &tokens, &ScoringWeights::default());
        assert_eq!(score, 22);
    }

    #[test]
    fn test_raw_score_single_hit_per_category() {
        // "fitness" appears twice in the bio but the full-text category
        // still fires only once
        let profile = create_test_profile(
            "Test",
            "Travel",
            "Goa",
            "fitness fitness fitness",
        );
        let tokens = vec!["fitness".to_string()];

        let score = raw_score(&profile, &tokens, &ScoringWeights::default());
        assert_eq!(score, 2);
    }

    #[test]
    fn test_raw_score_no_matches() {
        let profile = create_test_profile("Test", "Food", "Mumbai", "Recipes and cooking.");
        let tokens = vec!["xyz123".to_string()];

        assert_eq!(raw_score(&profile, &tokens, &ScoringWeights::default()), 0);
    }

    #[test]
    fn test_match_percent_clamps_at_100() {
        // 22 / (3 * 5) * 100 = 146.67 -> rounds to 147 -> clamped
        assert_eq!(match_percent(22, 3), 100);
    }

    #[test]
    fn test_match_percent_rounds() {
        // 2 / (1 * 5) * 100 = 40
        assert_eq!(match_percent(2, 1), 40);
        // 2 / (3 * 5) * 100 = 13.33 -> 13
        assert_eq!(match_percent(2, 3), 13);
    }

    #[test]
    fn test_match_percent_zero_tokens() {
        assert_eq!(match_percent(50, 0), 0);
    }

    #[test]
    fn test_match_percent_stays_in_range() {
        for raw in 0..200 {
            for count in 1..6 {
                let pct = match_percent(raw, count);
                assert!(pct <= 100);
            }
        }
    }
}
