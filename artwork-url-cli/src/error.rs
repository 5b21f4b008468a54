use artwork_url_core::ArtworkError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Pipeline, comparison or settings error from the core library
    #[error("{0}")]
    Artwork(#[from] ArtworkError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),

    /// `compare --fail-on-diff` found disagreeing rows
    #[error("{0} row(s) differ from the comparison table")]
    Differences(usize),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
