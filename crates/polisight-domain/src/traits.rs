//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the extraction core and
//! infrastructure. Implementations live in other crates
//! (polisight-llm, polisight-store).

use crate::ProductExtractionResult;
use serde::{Deserialize, Serialize};

/// One chat message in an LLM request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system" or "user")
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Build a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A single stateless LLM invocation.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Ordered message list
    pub messages: Vec<ChatMessage>,

    /// Model (deployment) identifier
    pub model: String,

    /// Sampling temperature; None leaves the provider default
    pub temperature: Option<f32>,

    /// Completion token budget
    pub max_tokens: u32,

    /// Hint that the provider should constrain output to a single JSON
    /// value. Callers never assume the hint is enforced and re-validate
    /// response shape themselves.
    pub json_mode: bool,
}

impl ChatRequest {
    /// Build a JSON-mode request with the given completion budget.
    pub fn json(messages: Vec<ChatMessage>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            messages,
            model: model.into(),
            temperature: None,
            max_tokens,
            json_mode: true,
        }
    }
}

/// Trait for stateless LLM gateways
///
/// Implemented by the infrastructure layer (polisight-llm)
pub trait LlmGateway {
    /// Error type for gateway operations
    type Error: std::fmt::Display;

    /// Issue one blocking chat call, returning the response text.
    fn call(&self, request: &ChatRequest) -> Result<String, Self::Error>;
}

/// Trait for retrieving a product's aggregated document text
///
/// Implemented by the infrastructure layer (polisight-store)
pub trait DocumentSource {
    /// Error type for document retrieval
    type Error: std::fmt::Display;

    /// Full concatenated page text for all of a product's documents, in
    /// stable document/page order. `None` (or empty) means not yet
    /// processed.
    fn document_text(&self, product_name: &str) -> Result<Option<String>, Self::Error>;
}

/// Trait for persisting per-product extraction results
///
/// Last-write-wins, keyed by product name. Implemented by the
/// infrastructure layer (polisight-store)
pub trait ResultStore {
    /// Error type for store operations
    type Error: std::fmt::Display;

    /// Persist a product's result, replacing any previous one.
    fn save(&self, result: &ProductExtractionResult) -> Result<(), Self::Error>;

    /// Load a product's result, if one has been saved.
    fn load(&self, product_name: &str) -> Result<Option<ProductExtractionResult>, Self::Error>;
}
