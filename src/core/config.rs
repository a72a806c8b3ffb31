//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file, if present) on top of defaults.

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use super::error::{Error, Result};

/// Default FoodData Central API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Environment variable holding the upstream API key.
pub const API_KEY_VAR: &str = "USDA_API_KEY";

/// Environment variable overriding the upstream base URL.
pub const BASE_URL_VAR: &str = "FDC_BASE_URL";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// FoodData Central API configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the FoodData Central API.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL every request path is appended to.
    pub base_url: Url,

    /// API key sent as `api_key` on every request.
    pub api_key: String,
}

impl UpstreamConfig {
    pub fn new(base_url: Url, api_key: String) -> Self {
        Self { base_url, api_key }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Food Data Central".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Build a configuration with default server and logging settings.
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            upstream,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `USDA_API_KEY` is required; the server must not start without it.
    /// Optional: `FDC_BASE_URL`, `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{} environment variable is not set", API_KEY_VAR)))?;

        let base_url = match std::env::var(BASE_URL_VAR) {
            Ok(raw) => {
                let url = Url::parse(&raw)
                    .map_err(|e| Error::config(format!("{} is not a valid URL: {}", BASE_URL_VAR, e)))?;
                info!("Using upstream base URL from environment: {}", url);
                url
            }
            Err(_) => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| Error::internal(format!("default base URL is invalid: {}", e)))?,
        };

        let mut config = Self::new(UpstreamConfig::new(base_url, api_key));

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }
}
