//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] polisight_store::StoreError),

    /// Extraction pipeline error
    #[error("Extraction error: {0}")]
    Extractor(#[from] polisight_extractor::ExtractorError),

    /// Question suggestion error
    #[error("Suggestion error: {0}")]
    Suggest(#[from] polisight_questions::SuggestError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Referenced product has no stored data
    #[error("No data for product '{0}'. Run 'extract' first.")]
    NoStoredResult(String),
}
