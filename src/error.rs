//! Top-level error type for the pipeline.

use thiserror::Error;

use crate::blockchain::types::ChainError;

/// Errors surfaced by the validation pipeline.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Required configuration options are absent.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Configuration present but malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input text file could not be read.
    #[error("Failed to read text file '{0}': {1}")]
    TextFile(String, std::io::Error),

    /// Report serialization failed.
    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    /// Chain-side failure: connection, authorization, or submission.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Result type for pipeline operations.
pub type AuditResult<T> = Result<T, AuditError>;
