// src/core/error.rs
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a request to the API did not produce usable data.
/// The page collapses every variant into one localized message; the
/// distinction only reaches the log and the CLI exit path.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn transport(url: &str, source: impl Into<BoxError>) -> Self {
        FetchError::Transport { url: s!(url), source: source.into() }
    }
}
