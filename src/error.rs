//! Error types for backend requests and configuration loading

use std::path::PathBuf;

use thiserror::Error;

/// Failure talking to the search backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, malformed URL and friends
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the JSON shape we expected
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
