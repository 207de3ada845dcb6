//! Polisight LLM Gateway Layer
//!
//! Implementations of the `LlmGateway` trait from `polisight-domain`.
//!
//! # Gateways
//!
//! - `MockGateway`: deterministic, scriptable gateway for testing
//! - `AzureOpenAiGateway`: Azure OpenAI chat-completions integration
//!
//! # Examples
//!
//! ```
//! use polisight_llm::MockGateway;
//! use polisight_domain::traits::{ChatMessage, ChatRequest, LlmGateway};
//!
//! let gateway = MockGateway::new("{\"q1\": \"Covered\"}");
//! let request = ChatRequest::json(vec![ChatMessage::user("test")], "o4-mini", 1000);
//! let result = gateway.call(&request).unwrap();
//! assert_eq!(result, "{\"q1\": \"Covered\"}");
//! ```

#![warn(missing_docs)]

pub mod azure;

use polisight_domain::traits::{ChatRequest, LlmGateway};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use azure::AzureOpenAiGateway;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response did not carry usable content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Gateway is not configured (missing endpoint or credentials)
    #[error("Gateway not configured: {0}")]
    NotConfigured(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// One scripted reply for the mock gateway.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// Mock LLM gateway for deterministic testing
///
/// Replies are served from a scripted queue, falling back to a fixed
/// default response once the queue is drained. Every request is captured
/// so tests can assert on call counts and prompt contents without any
/// network access.
///
/// # Examples
///
/// ```
/// use polisight_llm::MockGateway;
/// use polisight_domain::traits::{ChatMessage, ChatRequest, LlmGateway};
///
/// let gateway = MockGateway::new("{}");
/// gateway.push_response("not json");
///
/// let request = ChatRequest::json(vec![ChatMessage::user("hi")], "o4-mini", 100);
/// assert_eq!(gateway.call(&request).unwrap(), "not json");
/// assert_eq!(gateway.call(&request).unwrap(), "{}");
/// assert_eq!(gateway.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    default_response: String,
    queue: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockGateway {
    /// Create a mock gateway with a fixed default response.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            queue: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the next reply (served before the default response).
    pub fn push_response(&self, response: impl Into<String>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(MockReply::Text(response.into()));
    }

    /// Script a failed call as the next reply.
    pub fn push_error(&self, message: impl Into<String>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(MockReply::Error(message.into()));
    }

    /// Number of calls issued so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Snapshot of every request received, in call order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl LlmGateway for MockGateway {
    type Error = LlmError;

    fn call(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());

        match self.queue.lock().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Error(message)) => Err(LlmError::Other(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polisight_domain::traits::ChatMessage;

    fn request() -> ChatRequest {
        ChatRequest::json(vec![ChatMessage::user("prompt")], "o4-mini", 100)
    }

    #[test]
    fn test_mock_default_response() {
        let gateway = MockGateway::new("fixed");
        assert_eq!(gateway.call(&request()).unwrap(), "fixed");
        assert_eq!(gateway.call(&request()).unwrap(), "fixed");
    }

    #[test]
    fn test_mock_scripted_sequence() {
        let gateway = MockGateway::new("default");
        gateway.push_response("first");
        gateway.push_error("boom");

        assert_eq!(gateway.call(&request()).unwrap(), "first");
        assert!(matches!(gateway.call(&request()), Err(LlmError::Other(_))));
        assert_eq!(gateway.call(&request()).unwrap(), "default");
    }

    #[test]
    fn test_mock_captures_requests() {
        let gateway = MockGateway::new("ok");
        gateway.call(&request()).unwrap();

        let seen = gateway.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "o4-mini");
        assert!(seen[0].json_mode);
        assert_eq!(seen[0].messages[0].content, "prompt");
    }

    #[test]
    fn test_mock_clone_shares_state() {
        let gateway1 = MockGateway::new("ok");
        let gateway2 = gateway1.clone();

        gateway1.call(&request()).unwrap();

        // Both share the same call log via Arc
        assert_eq!(gateway2.call_count(), 1);
    }
}
