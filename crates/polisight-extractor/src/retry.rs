//! Retrying JSON caller
//!
//! Wraps the LLM gateway with bounded retry-on-malformed-output semantics.
//! This layer never parses JSON semantically; it only filters out
//! obviously malformed responses before they reach the caller's parser.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use polisight_domain::traits::{ChatRequest, LlmGateway};
use tracing::{error, info, warn};

/// Shape check only: a trimmed response must start and end with a matching
/// `{}` or `[]` pair to count as JSON-shaped.
fn looks_like_json(response: &str) -> bool {
    (response.starts_with('{') && response.ends_with('}'))
        || (response.starts_with('[') && response.ends_with(']'))
}

/// Issue a structured (JSON-mode) call, retrying on empty or
/// non-JSON-shaped responses with a fixed delay between attempts.
pub(crate) fn call_structured<G: LlmGateway>(
    gateway: &G,
    request: &ChatRequest,
    config: &ExtractorConfig,
) -> Result<String, ExtractorError> {
    for attempt in 1..=config.max_retries {
        match gateway.call(request) {
            Ok(response) => {
                let trimmed = response.trim();
                if trimmed.is_empty() {
                    warn!(
                        "Empty response from LLM on attempt {} for model {}.",
                        attempt, request.model
                    );
                } else if looks_like_json(trimmed) {
                    return Ok(response);
                } else {
                    let preview: String = trimmed.chars().take(100).collect();
                    warn!(
                        "LLM response on attempt {} is not JSON-shaped: {}...",
                        attempt, preview
                    );
                }
            }
            Err(e) => {
                error!(
                    "LLM call failed on attempt {} for model {}: {}",
                    attempt, request.model, e
                );
            }
        }

        if attempt < config.max_retries {
            info!("Retrying LLM call in {} seconds...", config.retry_delay_secs);
            std::thread::sleep(config.retry_delay());
        }
    }

    error!(
        "LLM call failed after {} retries for model {}.",
        config.max_retries, request.model
    );
    Err(ExtractorError::RetriesExhausted {
        attempts: config.max_retries,
    })
}
