//! Polisight Extractor
//!
//! The answer-extraction and self-correction pipeline: the core of the
//! insurance-product comparison system.
//!
//! # Architecture
//!
//! ```text
//! DocumentSource → ContextTruncator → category-scoped LLM calls
//!     → AnswerRecords → self-correction review → apply_corrections
//!     → ProductExtractionResult → ResultStore
//! ```
//!
//! # Key Properties
//!
//! - **Per-category failure isolation**: one category's malformed response
//!   never invalidates other categories' answers; affected questions carry
//!   an error status instead
//! - **Bounded retries**: structured calls retry on non-JSON-shaped output
//!   with a fixed delay, then give up
//! - **Idempotent correction merge**: applying a correction list is a pure
//!   function over the answer list; unknown targets are dropped
//!
//! # Example Usage
//!
//! ```
//! use polisight_extractor::{Extractor, ExtractorConfig, ExtractionMode};
//! use polisight_domain::{Question, QuestionsConfig};
//! use polisight_domain::traits::DocumentSource;
//! use polisight_llm::MockGateway;
//!
//! struct OneDoc;
//! impl DocumentSource for OneDoc {
//!     type Error = std::convert::Infallible;
//!     fn document_text(&self, _product: &str) -> Result<Option<String>, Self::Error> {
//!         Ok(Some("Dental care is covered up to 500 CHF.".to_string()))
//!     }
//! }
//!
//! let gateway = MockGateway::new(r#"{"q1": "Covered, 500 CHF"}"#);
//! let config = QuestionsConfig {
//!     categories: vec!["Dental".to_string()],
//!     questions: vec![Question::new("q1", "Is dental covered?", vec!["Dental".to_string()])],
//! };
//!
//! let extractor = Extractor::new(gateway, OneDoc, ExtractorConfig::default());
//! let result = extractor
//!     .extract("AlphaCare", &config, ExtractionMode::ByCategory, "o4-mini")
//!     .unwrap();
//! assert_eq!(result.answers[0].answer, "Covered, 500 CHF");
//! ```

#![warn(missing_docs)]

mod config;
mod corrections;
mod error;
mod extractor;
mod parser;
mod prompt;
mod retry;
mod truncate;


pub use config::ExtractorConfig;
pub use corrections::{apply_corrections, DEFAULT_CORRECTION_REASON};
pub use error::ExtractorError;
pub use extractor::{
    ExtractionMode, Extractor, ANSWER_NOT_FOUND, LLM_FAILED_ANSWER, NOT_IMPLEMENTED_ANSWER,
    PARSING_FAILED_ANSWER,
};
pub use truncate::{ContextTruncator, TRUNCATION_MARKER};
