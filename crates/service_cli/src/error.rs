//! CLI error types

use std::path::PathBuf;

use pricer_quotes::QuoteError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The quote request was rejected
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Payload text is not a JSON object
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Payload file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output could not be rendered
    #[error("Failed to render output: {0}")]
    Render(String),
}

impl CliError {
    /// Whether the command already printed this error on stdout.
    ///
    /// Rejected quotes are relayed as an error response, so `main` only
    /// exits with their code.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Quote(_))
    }

    /// Process exit code: 2 for rejected quotes, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Quote(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
