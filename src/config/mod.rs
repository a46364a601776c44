//! Configuration module for the site backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default model used to draft marketing copy.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the hosted text-generation API.
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite file backing the persisted key-value store
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Credential for the generative text API; generation is unavailable without it
    pub api_key: Option<String>,
    /// Model identifier passed to the generative text API
    pub generation_model: String,
    /// Base URL of the generative text API
    pub generation_endpoint: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Problems with individual values fall back to defaults and are
    /// returned as warnings, since logging is not set up yet at this point.
    pub fn from_env() -> (Self, Vec<String>) {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let db_path = var("WORLDCLASS_DB_PATH")
            .unwrap_or_else(|| "./data/site.sqlite".to_string())
            .into();

        let bind_addr = match var("WORLDCLASS_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warnings.push(format!(
                    "Invalid WORLDCLASS_BIND_ADDR {:?}, using {}",
                    raw, DEFAULT_BIND_ADDR
                ));
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        let log_level = var("WORLDCLASS_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let api_key = var("API_KEY").filter(|key| !key.trim().is_empty());

        let generation_model = var("WORLDCLASS_GENERATION_MODEL")
            .unwrap_or_else(|| DEFAULT_GENERATION_MODEL.to_string());

        let generation_endpoint = var("WORLDCLASS_GENERATION_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_GENERATION_ENDPOINT.to_string());

        let config = Self {
            db_path,
            bind_addr,
            log_level,
            api_key,
            generation_model,
            generation_endpoint,
        };
        (config, warnings)
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("WORLDCLASS_DB_PATH");
        env::remove_var("WORLDCLASS_BIND_ADDR");
        env::remove_var("WORLDCLASS_LOG_LEVEL");
        env::remove_var("WORLDCLASS_GENERATION_MODEL");
        env::remove_var("WORLDCLASS_GENERATION_ENDPOINT");
        env::remove_var("API_KEY");

        let (config, warnings) = Config::from_env();

        assert!(warnings.is_empty());
        assert_eq!(config.db_path, PathBuf::from("./data/site.sqlite"));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level, "info");
        assert!(config.api_key.is_none());
        assert_eq!(config.generation_model, DEFAULT_GENERATION_MODEL);
        assert_eq!(config.generation_endpoint, DEFAULT_GENERATION_ENDPOINT);
    }

    #[test]
    fn test_invalid_bind_addr_falls_back_with_warning() {
        let (config, warnings) = Config::from_vars(|key| match key {
            "WORLDCLASS_BIND_ADDR" => Some("not-an-address".to_string()),
            "API_KEY" => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.api_key.is_none());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not-an-address"));
    }
}
