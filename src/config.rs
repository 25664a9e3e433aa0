use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Where the profile roster comes from
#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    /// "curated" (fixture roster) or "generated" (seeded synthetic roster)
    #[serde(default = "default_roster_source")]
    pub source: String,
    #[serde(default = "default_roster_size")]
    pub size: usize,
    #[serde(default = "default_roster_seed")]
    pub seed: u64,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            source: default_roster_source(),
            size: default_roster_size(),
            seed: default_roster_seed(),
        }
    }
}

fn default_roster_source() -> String { "curated".to_string() }
fn default_roster_size() -> usize { 200 }
fn default_roster_seed() -> u64 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_result_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_result_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_result_limit() -> usize { 4 }
fn default_max_limit() -> usize { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_noise_threshold")]
    pub noise_threshold: u8,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            noise_threshold: default_noise_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_niche_weight")]
    pub niche: u32,
    #[serde(default = "default_city_weight")]
    pub city: u32,
    #[serde(default = "default_full_text_weight")]
    pub full_text: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            niche: default_niche_weight(),
            city: default_city_weight(),
            full_text: default_full_text_weight(),
        }
    }
}

fn default_niche_weight() -> u32 { 10 }
fn default_city_weight() -> u32 { 8 }
fn default_full_text_weight() -> u32 { 2 }
fn default_noise_threshold() -> u8 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_entries")]
    pub max_entries: u64,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: default_cache_entries(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_entries() -> u64 { 1000 }
fn default_cache_ttl() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantSettings {
    #[serde(default = "default_assistant_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_assistant_model")]
    pub model: String,
    /// Absent key disables the assistant routes; the engine never needs it
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            endpoint: default_assistant_endpoint(),
            model: default_assistant_model(),
            api_key: None,
        }
    }
}

fn default_assistant_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_assistant_model() -> String { "gemini-1.5-flash".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INFLUMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. INFLUMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("INFLUMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("INFLUMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Pull secrets from the conventional environment variables
///
/// GEMINI_API_KEY is checked first so local setups can share one .env with
/// the frontend, then the prefixed form.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("GEMINI_API_KEY")
        .or_else(|_| env::var("INFLUMATCH_ASSISTANT__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(key) = api_key {
        builder = builder.set_override("assistant.api_key", key)?;
    }

    builder.build()
}
