//! Explicit API configuration.
//!
//! The token and base URL travel with the config value; nothing in this
//! workspace reads them from globals. The token can come from the config
//! file or from the environment, and is never logged.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, Result};

/// Environment variable that overrides the config-file token.
pub const TOKEN_ENV_VAR: &str = "REDCAP_API_TOKEN";

/// Connection settings for one REDCap instance.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Full URL of the API endpoint, e.g. `https://redcap.example.org/api/`.
    pub api_url: String,
    /// Project API token.
    pub api_token: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    redcap: ConfigSection,
}

#[derive(Debug, Deserialize)]
struct ConfigSection {
    api_url: String,
    #[serde(default)]
    api_token: Option<String>,
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let config = Self {
            api_url: api_url.into(),
            api_token: api_token.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file:
    ///
    /// ```toml
    /// [redcap]
    /// api_url = "https://redcap.example.org/api/"
    /// api_token = "..."   # optional, REDCAP_API_TOKEN wins
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ApiError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: ConfigFile =
            toml::from_str(&content).map_err(|source| ApiError::ConfigToml {
                path: path.to_path_buf(),
                source,
            })?;
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or(parsed.redcap.api_token)
            .ok_or(ApiError::MissingToken)?;
        debug!(path = %path.display(), "loaded API config");
        let config = Self {
            api_url: parsed.redcap.api_url,
            api_token: token,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(ApiError::MissingUrl);
        }
        if self.api_token.trim().is_empty() {
            return Err(ApiError::MissingToken);
        }
        Ok(())
    }
}
