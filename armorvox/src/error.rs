//! Error types for the Armorvox API client.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Armorvox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Armorvox client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested API token did not match any supported API.
    #[error("API not supported: {0}")]
    UnsupportedApi(String),

    /// Bad or missing command line parameters for the selected API.
    #[error("{0}")]
    Usage(String),

    /// An utterance audio file could not be read.
    #[error("cannot read utterance file {path}: {source}")]
    UtteranceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sibling text file for a phrase given as 'file' could not be read.
    #[error("cannot read phrase file {path}: {source}")]
    PhraseFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a usage error with the given message.
    pub fn usage(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }

    /// Returns true if this error should be reported together with the
    /// command line usage help rather than as a failure.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::UnsupportedApi(_))
    }
}
