//! Error types for regionscan

use thiserror::Error;

/// Main error type for the crate.
///
/// The scanner itself never fails: unavailable cells are skipped, not
/// reported. Errors only come from the configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
