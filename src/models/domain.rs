use serde::{Deserialize, Serialize};

/// A social media presence attached to a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub handle: String,
}

/// Influencer profile as carried in the roster
///
/// Only `name`, `niche`, `city`, and `bio` participate in match scoring;
/// everything else is display data passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub city: String,
    pub niche: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "audienceType", default)]
    pub audience_type: String,
    #[serde(default)]
    pub region: String,
    #[serde(rename = "socialLinks", default)]
    pub social_links: Vec<SocialLink>,
    #[serde(rename = "pastBrands", default)]
    pub past_brands: Vec<String>,
}

impl InfluencerProfile {
    /// Lower-cased concatenation of all searchable text fields
    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.name, self.niche, self.city, self.bio).to_lowercase()
    }
}

/// A profile paired with its match percentage for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProfile {
    #[serde(flatten)]
    pub profile: InfluencerProfile,
    #[serde(rename = "matchPercent")]
    pub match_percent: u8,
}

/// Criteria for the profile directory listing
///
/// Absent criteria match everything; present criteria are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct ProfileFilter {
    pub search: Option<String>,
    pub city: Option<String>,
    pub niche: Option<String>,
}

/// Points awarded per token for each field category
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub niche: u32,
    pub city: u32,
    pub full_text: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            niche: 10,
            city: 8,
            full_text: 2,
        }
    }
}

/// Abbreviate a follower count for display (1_200_000 -> "1.2M")
pub fn format_followers(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text_is_lowercased() {
        let profile = InfluencerProfile {
            id: "p1".to_string(),
            name: "Pavan Hari".to_string(),
            avatar: String::new(),
            city: "Hyderabad".to_string(),
            niche: "Fitness".to_string(),
            followers: 450_000,
            rating: 4.6,
            bio: "Fitness enthusiast".to_string(),
            languages: vec![],
            audience_type: String::new(),
            region: String::new(),
            social_links: vec![],
            past_brands: vec![],
        };

        let text = profile.search_text();
        assert_eq!(text, "pavan hari fitness hyderabad fitness enthusiast");
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.niche, 10);
        assert_eq!(weights.city, 8);
        assert_eq!(weights.full_text, 2);
    }

    #[test]
    fn test_format_followers() {
        assert_eq!(format_followers(1_200_000), "1.2M");
        assert_eq!(format_followers(450_000), "450.0K");
        assert_eq!(format_followers(999), "999");
    }
}
