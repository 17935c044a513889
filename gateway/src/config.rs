//! Gateway configuration

use serde::{Deserialize, Serialize};
use svrdash_core::{Error, Result};

/// Resource root used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/server";

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the server resource collection
    pub base_url: String,
}

impl GatewayConfig {
    /// Create a configuration with an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
        }
    }

    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Self::load_from_env()
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: GatewayConfig = toml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))?;

        Ok(Self::new(config.base_url))
    }

    /// Load from environment variables
    fn load_from_env() -> Result<Self> {
        let base_url =
            std::env::var("SVRDASH_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(base_url))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
