//! Polisight Domain Layer
//!
//! This crate contains the core data model for the insurance-product
//! comparison pipeline and the trait seams all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Question**: one configured comparison question, scoped to categories
//! - **Category**: a named coverage topic (e.g. "Dental") used to partition
//!   questions and scope extraction calls
//! - **AnswerRecord**: one extracted answer with a provenance status tag
//! - **CorrectionSuggestion**: a targeted fix proposed by the self-review pass
//! - **ProductExtractionResult**: the per-product answer set, keyed by
//!   question id
//!
//! ## Architecture
//!
//! - Pure data model and trait definitions only
//! - Infrastructure implementations (LLM gateways, file store) live in
//!   other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answer;
pub mod category;
pub mod correction;
pub mod question;
pub mod traits;

// Re-exports for convenience
pub use answer::{AnswerRecord, AnswerStatus, ProductExtractionResult};
pub use category::normalize_category;
pub use correction::CorrectionSuggestion;
pub use question::{Question, QuestionsConfig};
