//! Error types.
//!
//! Engine operations after construction are total, so the only failures
//! are bad configuration and identification responses.

use thiserror::Error;

/// Rejected game configuration or pair set.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pair set is empty")]
    EmptyPairSet,

    #[error("pair at position {0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate pair name {0:?}")]
    DuplicateName(String),

    #[error("too many pairs: {count} (at most {max})")]
    TooManyPairs { count: usize, max: usize },

    #[error("invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),
}

/// Failure reported while turning an upload into an identification result.
#[derive(Debug, Error)]
pub enum IdentifyError {
    /// The endpoint answered with an error message.
    #[error("{0}")]
    Rejected(String),

    #[error("malformed identification response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported file type: {0:?}")]
    UnsupportedFileType(String),

    #[error("file is {size} bytes, larger than the {max} byte limit")]
    TooLarge { size: u64, max: u64 },
}
