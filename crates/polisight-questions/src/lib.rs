//! Polisight Question Suggestion
//!
//! Generates a draft questions configuration (coverage categories plus
//! comparison questions) from a corpus of product documents via two
//! structured LLM calls. Suggested category names are normalized with
//! [`polisight_domain::normalize_category`] and question scopes are
//! validated against the normalized category set; the extraction core
//! afterwards relies on exact matching only.

#![warn(missing_docs)]

mod prompt;

use polisight_domain::traits::{ChatMessage, ChatRequest, LlmGateway};
use polisight_domain::{normalize_category, Question, QuestionsConfig};
use serde_json::Value;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during suggestion
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Gateway call failed
    #[error("LLM gateway error: {0}")]
    Gateway(String),

    /// Response was not decodable or not the expected shape
    #[error("Malformed suggestion response: {0}")]
    MalformedResponse(String),
}

/// Configuration for the suggester
#[derive(Debug, Clone)]
pub struct SuggesterConfig {
    /// Character budget for the combined document corpus
    pub max_corpus_chars: usize,

    /// Longest accepted category name (characters)
    pub max_category_chars: usize,

    /// Completion token budget for the categories call
    pub categories_max_tokens: u32,

    /// Completion token budget for the questions call
    pub questions_max_tokens: u32,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            max_corpus_chars: 250_000,
            max_category_chars: 100,
            categories_max_tokens: 2_000,
            questions_max_tokens: 32_000,
        }
    }
}

/// Optional analyst-supplied examples steering the suggestion calls.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSamples {
    /// Sample category names to consider
    pub categories: Vec<String>,

    /// Sample question texts to consider
    pub questions: Vec<String>,
}

/// Suggests categories and questions from document content.
pub struct QuestionSuggester<G: LlmGateway> {
    gateway: G,
    config: SuggesterConfig,
}

impl<G: LlmGateway> QuestionSuggester<G> {
    /// Create a suggester over a gateway.
    pub fn new(gateway: G, config: SuggesterConfig) -> Self {
        Self { gateway, config }
    }

    /// Suggest a questions configuration from per-product page content.
    ///
    /// `corpus` is an ordered list of `(product_name, page_contents)`.
    /// An empty corpus yields an empty configuration, not an error.
    pub fn suggest(
        &self,
        corpus: &[(String, Vec<String>)],
        samples: &SuggestionSamples,
        model: &str,
    ) -> Result<QuestionsConfig, SuggestError> {
        if corpus.is_empty() {
            warn!("No document content provided to suggest categories/questions.");
            return Ok(QuestionsConfig::default());
        }

        info!("Suggesting categories and questions using model: {}", model);
        let corpus_text = self.prepare_corpus(corpus);

        let categories = self.suggest_categories(&corpus_text, samples, model)?;
        if categories.is_empty() {
            warn!("No categories were suggested by the LLM.");
            return Ok(QuestionsConfig::default());
        }

        let questions = match self.suggest_questions(&categories, &corpus_text, samples, model) {
            Ok(questions) => questions,
            Err(e) => {
                warn!("Question suggestion failed, keeping categories only: {}", e);
                Vec::new()
            }
        };

        info!("Generated {} questions.", questions.len());
        Ok(QuestionsConfig {
            categories,
            questions,
        })
    }

    /// Combine all document content into a single string, with per-product
    /// headers and truncation when over budget.
    fn prepare_corpus(&self, corpus: &[(String, Vec<String>)]) -> String {
        let mut parts: Vec<String> = Vec::new();
        for (product_name, contents) in corpus {
            parts.push(format!("\n\n--- Content from Product: {} ---\n", product_name));
            for content in contents {
                parts.push(content.clone());
                parts.push("\n".to_string());
            }
        }

        let combined = parts.concat();
        if combined.chars().count() > self.config.max_corpus_chars {
            warn!(
                "Full text corpus truncated to ~{} chars for LLM.",
                self.config.max_corpus_chars
            );
            let cut = combined
                .char_indices()
                .nth(self.config.max_corpus_chars)
                .map(|(i, _)| i)
                .unwrap_or(combined.len());
            return format!("{}\n... [CONTENT TRUNCATED]", &combined[..cut]);
        }
        combined
    }

    fn call_json(&self, messages: Vec<ChatMessage>, model: &str, max_tokens: u32) -> Result<Value, SuggestError> {
        let request = ChatRequest::json(messages, model, max_tokens);
        let response = self
            .gateway
            .call(&request)
            .map_err(|e| SuggestError::Gateway(e.to_string()))?;
        serde_json::from_str(response.trim())
            .map_err(|e| SuggestError::MalformedResponse(e.to_string()))
    }

    fn suggest_categories(
        &self,
        corpus_text: &str,
        samples: &SuggestionSamples,
        model: &str,
    ) -> Result<Vec<String>, SuggestError> {
        let messages = vec![
            ChatMessage::system(prompt::CATEGORIES_SYSTEM_PROMPT),
            ChatMessage::user(prompt::categories_user_prompt(&samples.categories, corpus_text)),
        ];
        let value = self.call_json(messages, model, self.config.categories_max_tokens)?;

        let raw = value
            .get("categories")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SuggestError::MalformedResponse("missing or non-array 'categories' key".to_string())
            })?;

        // Normalize, drop empty/oversized names, dedupe, sort
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for item in raw {
            let name = match item.as_str() {
                Some(name) => name,
                None => continue,
            };
            if name.trim().is_empty() || name.trim().chars().count() >= self.config.max_category_chars {
                continue;
            }
            seen.insert(normalize_category(name));
        }

        let categories: Vec<String> = seen.into_iter().collect();
        info!("Suggested categories: {:?}", categories);
        Ok(categories)
    }

    fn suggest_questions(
        &self,
        categories: &[String],
        corpus_text: &str,
        samples: &SuggestionSamples,
        model: &str,
    ) -> Result<Vec<Question>, SuggestError> {
        let messages = vec![
            ChatMessage::system(prompt::QUESTIONS_SYSTEM_PROMPT),
            ChatMessage::user(prompt::questions_user_prompt(
                categories,
                &samples.questions,
                corpus_text,
            )),
        ];
        let value = self.call_json(messages, model, self.config.questions_max_tokens)?;

        let raw = value
            .get("questions")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SuggestError::MalformedResponse("missing or non-array 'questions' key".to_string())
            })?;

        let mut questions = Vec::new();
        for item in raw {
            let text = item.get("text").and_then(Value::as_str);
            let scoped = item.get("applies_to_categories").and_then(Value::as_array);
            let (text, scoped) = match (text, scoped) {
                (Some(text), Some(scoped)) => (text, scoped),
                _ => {
                    warn!("Skipping malformed question data: {}", item);
                    continue;
                }
            };

            let mut valid_categories = Vec::new();
            for name in scoped.iter().filter_map(Value::as_str) {
                let normalized = normalize_category(name);
                if categories.iter().any(|c| *c == normalized) {
                    valid_categories.push(normalized);
                } else if categories.iter().any(|c| c == name) {
                    valid_categories.push(name.to_string());
                } else {
                    debug!("Question category '{}' not in suggested list; dropping.", name);
                }
            }
            valid_categories.sort();
            valid_categories.dedup();

            if valid_categories.is_empty() {
                warn!("Skipping question '{}' due to no valid categories.", text);
                continue;
            }

            questions.push(Question::new(
                format!("q{:03}", questions.len() + 1),
                text.trim(),
                valid_categories,
            ));
        }
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polisight_llm::MockGateway;

    fn corpus() -> Vec<(String, Vec<String>)> {
        vec![(
            "AlphaCare".to_string(),
            vec!["Dental coverage up to 500 CHF.".to_string()],
        )]
    }

    fn suggester(gateway: MockGateway) -> QuestionSuggester<MockGateway> {
        QuestionSuggester::new(gateway, SuggesterConfig::default())
    }

    #[test]
    fn test_empty_corpus_yields_empty_config() {
        let gateway = MockGateway::new("{}");
        let config = suggester(gateway.clone())
            .suggest(&[], &SuggestionSamples::default(), "o4-mini")
            .unwrap();
        assert!(config.categories.is_empty());
        assert!(config.questions.is_empty());
        assert_eq!(gateway.call_count(), 0);
    }

    #[test]
    fn test_suggest_normalizes_and_sorts_categories() {
        let gateway = MockGateway::new(r#"{"questions": []}"#);
        gateway.push_response(
            r#"{"categories": ["theft/burglary", "Fire Damage", "  fire damage  ", 42, ""]}"#,
        );

        let config = suggester(gateway)
            .suggest(&corpus(), &SuggestionSamples::default(), "o4-mini")
            .unwrap();
        assert_eq!(
            config.categories,
            vec!["Fire Damage".to_string(), "Theft And Burglary".to_string()]
        );
    }

    #[test]
    fn test_questions_mapped_through_normalization() {
        let gateway = MockGateway::new("{}");
        gateway.push_response(r#"{"categories": ["Theft/Burglary", "Fire Damage"]}"#);
        gateway.push_response(
            r#"{"questions": [
                {"text": "Is this category covered under the insurance?",
                 "applies_to_categories": ["theft / burglary"]},
                {"text": "What is the maximum coverage amount?",
                 "applies_to_categories": ["Fire Damage", "Unknown Category"]},
                {"text": "Orphan question", "applies_to_categories": ["Nowhere"]},
                {"text": "Broken entry"}
            ]}"#,
        );

        let config = suggester(gateway)
            .suggest(&corpus(), &SuggestionSamples::default(), "o4-mini")
            .unwrap();

        assert_eq!(config.questions.len(), 2);
        assert_eq!(config.questions[0].id, "q001");
        assert_eq!(
            config.questions[0].applies_to_categories,
            vec!["Theft And Burglary".to_string()]
        );
        assert_eq!(config.questions[1].id, "q002");
        // Unknown category reference silently dropped, valid one kept
        assert_eq!(
            config.questions[1].applies_to_categories,
            vec!["Fire Damage".to_string()]
        );
    }

    #[test]
    fn test_malformed_categories_response_fails() {
        let gateway = MockGateway::new(r#"{"categories": "not a list"}"#);
        let result = suggester(gateway).suggest(&corpus(), &SuggestionSamples::default(), "o4-mini");
        assert!(matches!(result, Err(SuggestError::MalformedResponse(_))));
    }

    #[test]
    fn test_malformed_questions_keeps_categories() {
        let gateway = MockGateway::new("not json at all");
        gateway.push_response(r#"{"categories": ["Dental"]}"#);

        let config = suggester(gateway)
            .suggest(&corpus(), &SuggestionSamples::default(), "o4-mini")
            .unwrap();
        assert_eq!(config.categories, vec!["Dental".to_string()]);
        assert!(config.questions.is_empty());
    }

    #[test]
    fn test_no_categories_skips_questions_call() {
        let gateway = MockGateway::new("{}");
        gateway.push_response(r#"{"categories": []}"#);

        let config = suggester(gateway.clone())
            .suggest(&corpus(), &SuggestionSamples::default(), "o4-mini")
            .unwrap();
        assert!(config.is_empty());
        assert_eq!(gateway.call_count(), 1);
    }

    #[test]
    fn test_corpus_truncation() {
        let gateway = MockGateway::new("{}");
        gateway.push_response(r#"{"categories": []}"#);

        let long_page = "x".repeat(300_000);
        let s = suggester(gateway.clone());
        s.suggest(
            &[("Big".to_string(), vec![long_page])],
            &SuggestionSamples::default(),
            "o4-mini",
        )
        .unwrap();

        let sent = &gateway.requests()[0].messages[1].content;
        assert!(sent.contains("... [CONTENT TRUNCATED]"));
    }
}
