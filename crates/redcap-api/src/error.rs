use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config is missing an API token (set [redcap] api_token or {env})", env = crate::TOKEN_ENV_VAR)]
    MissingToken,

    #[error("config has an empty api_url")]
    MissingUrl,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("REDCap API returned status {status}: {body}")]
    Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;
