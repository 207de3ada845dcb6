//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur during extraction, review, or correction merge
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// No document text is available for the product
    #[error("No document text available for product '{0}'")]
    NoDocumentText(String),

    /// Document source failed
    #[error("Document source error: {0}")]
    Source(String),

    /// LLM call produced no JSON-shaped response within the retry budget
    #[error("LLM call failed after {attempts} attempts")]
    RetriesExhausted {
        /// Attempts made before giving up
        attempts: u32,
    },

    /// Top-level corrections response was missing or malformed
    #[error("Malformed corrections response: {0}")]
    MalformedCorrections(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
