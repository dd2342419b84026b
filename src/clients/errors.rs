//! Error taxonomy for the recommendation pipeline.

use rspotify::{ClientError, model::IdError};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures are fatal: nothing below `main` catches or retries.
#[derive(Error, Debug)]
pub enum Error {
    /// The credential was rejected during authorization.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The API returned a non-success response, including throttling.
    #[error("Spotify API error: {0}")]
    Upstream(#[from] ClientError),

    /// A response item was missing an expected field or carried a
    /// malformed id.
    #[error("Unexpected response shape: {0}")]
    DataShape(String),

    /// Required process configuration is missing or unreadable.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<IdError> for Error {
    fn from(err: IdError) -> Self {
        Error::DataShape(err.to_string())
    }
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Configuration(err.to_string())
    }
}
