use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::RankingLimits;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub community_api: CommunityApiSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommunityApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 10 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// Redis URL; the service runs L1-only when unset
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_max_matched")]
    pub max_matched: usize,
    #[serde(default = "default_min_matched")]
    pub min_matched: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            max_matched: default_max_matched(),
            min_matched: default_min_matched(),
        }
    }
}

impl MatchingSettings {
    pub fn limits(&self) -> RankingLimits {
        RankingLimits {
            max_results: self.max_results,
            max_matched: self.max_matched,
            min_matched: self.min_matched,
        }
    }
}

fn default_max_results() -> usize { 8 }
fn default_max_matched() -> usize { 6 }
fn default_min_matched() -> usize { 4 }

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
    /// 4. Environment variables (prefixed with CONNECTION)
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CONNECTION__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CONNECTION")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // Conventional deployment variables win over the prefixed ones
        if let Ok(redis_url) = std::env::var("REDIS_URL") {
            builder = builder.set_override("cache.redis_url", redis_url)?;
        }
        if let Ok(api_url) = std::env::var("COMMUNITY_API_URL") {
            builder = builder.set_override("community_api.base_url", api_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CONNECTION")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching_limits() {
        let limits = MatchingSettings::default().limits();
        assert_eq!(limits, RankingLimits::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_shipped_default_config_parses() {
        let settings: Settings = toml::from_str(include_str!("../config/default.toml"))
            .expect("config/default.toml should deserialize");

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.matching.limits(), RankingLimits::default());
        assert!(settings.cache.redis_url.is_none());
    }

    #[test]
    fn test_minimal_config_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [community_api]
            base_url = "http://localhost:5000"
            "#,
        )
        .unwrap();

        assert_eq!(settings.community_api.timeout_secs, 10);
        assert_eq!(settings.matching.max_results, 8);
        assert_eq!(settings.logging.format, "json");
    }
}
