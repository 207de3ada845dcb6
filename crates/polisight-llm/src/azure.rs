//! Azure OpenAI Gateway Implementation
//!
//! Chat-completions integration against an Azure OpenAI deployment. The
//! gateway is constructed explicitly and passed in as a dependency; there
//! is no process-wide cached client.
//!
//! # Examples
//!
//! ```no_run
//! use polisight_llm::AzureOpenAiGateway;
//!
//! let gateway = AzureOpenAiGateway::new(
//!     "https://example.openai.azure.com",
//!     "api-key",
//!     "2024-12-01-preview",
//! );
//! ```

use crate::LlmError;
use polisight_domain::traits::{ChatMessage, ChatRequest, LlmGateway};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default per-request HTTP timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Default Azure OpenAI API version
pub const DEFAULT_API_VERSION: &str = "2024-12-01-preview";

/// Azure OpenAI chat-completions gateway
pub struct AzureOpenAiGateway {
    endpoint: String,
    api_key: String,
    api_version: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

/// Reasoning deployments reject `temperature` and use
/// `max_completion_tokens` instead of `max_tokens`.
fn is_reasoning_model(model: &str) -> bool {
    matches!(model.split('-').next(), Some("o1" | "o3" | "o4"))
}

impl AzureOpenAiGateway {
    /// Create a new gateway for the given Azure OpenAI resource.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client with static configuration");

        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            api_version: api_version.into(),
            client,
        }
    }

    /// Issue one chat call asynchronously.
    pub async fn call_async(&self, request: &ChatRequest) -> Result<String, LlmError> {
        if self.endpoint.is_empty() || self.api_key.is_empty() {
            return Err(LlmError::NotConfigured(
                "Azure OpenAI endpoint or API key is missing".to_string(),
            ));
        }

        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, request.model, self.api_version
        );

        let reasoning = is_reasoning_model(&request.model);
        let body = CompletionRequest {
            messages: &request.messages,
            temperature: if reasoning { None } else { request.temperature },
            max_tokens: if reasoning { None } else { Some(request.max_tokens) },
            max_completion_tokens: if reasoning { Some(request.max_tokens) } else { None },
            response_format: request
                .json_mode
                .then_some(ResponseFormat { format_type: "json_object" }),
        };

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        match completion.usage {
            Some(usage) => info!(
                "LLM call to {} succeeded. Usage: prompt {}, completion {}, total {}",
                request.model, usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            ),
            None => info!("LLM call to {} succeeded. Usage data not available.", request.model),
        }

        match completion.choices.into_iter().next().and_then(|c| c.message.content) {
            Some(content) => Ok(content),
            None => {
                warn!("LLM call to {} returned no content in choices.", request.model);
                Err(LlmError::InvalidResponse(
                    "No content in response choices".to_string(),
                ))
            }
        }
    }
}

impl LlmGateway for AzureOpenAiGateway {
    type Error = LlmError;

    fn call(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for the async HTTP call
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
            .block_on(self.call_async(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polisight_domain::traits::ChatMessage;

    #[test]
    fn test_reasoning_model_detection() {
        assert!(is_reasoning_model("o4-mini"));
        assert!(is_reasoning_model("o3"));
        assert!(!is_reasoning_model("gpt-4o"));
        assert!(!is_reasoning_model("ollama"));
    }

    #[test]
    fn test_endpoint_trailing_slash_stripped() {
        let gateway = AzureOpenAiGateway::new("https://x.openai.azure.com/", "key", "v1");
        assert_eq!(gateway.endpoint, "https://x.openai.azure.com");
    }

    #[test]
    fn test_unconfigured_gateway_errors() {
        let gateway = AzureOpenAiGateway::new("", "", DEFAULT_API_VERSION);
        let request = ChatRequest::json(vec![ChatMessage::user("hi")], "o4-mini", 100);

        let result = gateway.call(&request);
        assert!(matches!(result, Err(LlmError::NotConfigured(_))));
    }

    #[test]
    fn test_reasoning_request_body_shape() {
        let request = ChatRequest::json(vec![ChatMessage::user("hi")], "o4-mini", 32000);
        let reasoning = is_reasoning_model(&request.model);
        let body = CompletionRequest {
            messages: &request.messages,
            temperature: if reasoning { None } else { request.temperature },
            max_tokens: if reasoning { None } else { Some(request.max_tokens) },
            max_completion_tokens: if reasoning { Some(request.max_tokens) } else { None },
            response_format: request
                .json_mode
                .then_some(ResponseFormat { format_type: "json_object" }),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["max_completion_tokens"], 32000);
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["response_format"]["type"], "json_object");
    }
}
