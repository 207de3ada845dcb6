//! Category-scoped extraction and self-correction review

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{parse_answer_object, parse_corrections, value_to_answer};
use crate::prompt;
use crate::retry::call_structured;
use crate::truncate::ContextTruncator;
use polisight_domain::traits::{ChatMessage, ChatRequest, DocumentSource, LlmGateway};
use polisight_domain::{
    AnswerRecord, AnswerStatus, CorrectionSuggestion, ProductExtractionResult, QuestionsConfig,
};
use tracing::{error, info, warn};

/// Sentinel answer for a category whose LLM call failed after all retries
pub const LLM_FAILED_ANSWER: &str = "Error: LLM extraction failed";

/// Sentinel answer for a category whose response could not be parsed
pub const PARSING_FAILED_ANSWER: &str = "Error: Parsing LLM response failed";

/// Sentinel answer for the unimplemented whole-document mode
pub const NOT_IMPLEMENTED_ANSWER: &str = "Error: Batch extraction not fully implemented";

/// Fallback answer when a question id is missing from a valid response
pub const ANSWER_NOT_FOUND: &str = "Answer not found by LLM.";

/// How questions are batched into LLM calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// One call per configured category (the only implemented mode)
    ByCategory,

    /// One call for the whole question set; not implemented, every
    /// question surfaces a fixed "not implemented" status
    WholeDocument,
}

/// Runs the answer-extraction and self-correction pipeline for one
/// product at a time.
///
/// Execution is synchronous and blocking: category calls are issued
/// sequentially and retries sleep on the calling thread.
pub struct Extractor<G, D>
where
    G: LlmGateway,
    D: DocumentSource,
{
    gateway: G,
    documents: D,
    config: ExtractorConfig,
}

impl<G, D> Extractor<G, D>
where
    G: LlmGateway,
    D: DocumentSource,
{
    /// Create a new extractor over a gateway and a document source.
    pub fn new(gateway: G, documents: D, config: ExtractorConfig) -> Self {
        Self {
            gateway,
            documents,
            config,
        }
    }

    fn truncator(&self) -> ContextTruncator {
        ContextTruncator::new(self.config.max_context_chars)
    }

    /// Load a product's aggregated document text, truncated to budget.
    ///
    /// Fails fast when no text is available; no records are produced in
    /// that case.
    fn load_context(&self, product_name: &str) -> Result<String, ExtractorError> {
        let full_text = self
            .documents
            .document_text(product_name)
            .map_err(|e| ExtractorError::Source(e.to_string()))?
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ExtractorError::NoDocumentText(product_name.to_string()))?;

        Ok(self.truncator().truncate(&full_text, product_name))
    }

    /// Whether a product's document text exceeds the context budget, plus
    /// its length. Absent text reports `(false, 0)`.
    pub fn check_document_size(&self, product_name: &str) -> Result<(bool, usize), ExtractorError> {
        let text = self
            .documents
            .document_text(product_name)
            .map_err(|e| ExtractorError::Source(e.to_string()))?;

        match text {
            Some(text) if !text.trim().is_empty() => Ok(self.truncator().exceeds_limit(&text)),
            _ => Ok((false, 0)),
        }
    }

    /// Extract answers for every configured question for one product.
    ///
    /// Failures are localized per category: a failed or unparseable
    /// category yields error-status records for its questions and the
    /// pipeline continues with the next category.
    pub fn extract(
        &self,
        product_name: &str,
        questions_config: &QuestionsConfig,
        mode: ExtractionMode,
        model: &str,
    ) -> Result<ProductExtractionResult, ExtractorError> {
        info!(
            "Starting answer extraction for product: {} (mode {:?}) using model {}.",
            product_name, mode, model
        );

        let context = self.load_context(product_name)?;
        let mut result = ProductExtractionResult::new(product_name);

        if questions_config.is_empty() {
            warn!("No categories or questions configured for {}.", product_name);
            return Ok(result);
        }

        match mode {
            ExtractionMode::ByCategory => {
                for category in &questions_config.categories {
                    self.extract_category(
                        product_name,
                        category,
                        questions_config,
                        &context,
                        model,
                        &mut result,
                    );
                }
            }
            ExtractionMode::WholeDocument => {
                warn!("Whole-document extraction is not implemented.");
                for question in &questions_config.questions {
                    let category = if question.applies_to_categories.is_empty() {
                        "N/A".to_string()
                    } else {
                        question.applies_to_categories.join(", ")
                    };
                    result.upsert(AnswerRecord::new(
                        &question.id,
                        &question.text,
                        category,
                        NOT_IMPLEMENTED_ANSWER,
                        AnswerStatus::ErrorNotImplemented,
                    ));
                }
            }
        }

        Ok(result)
    }

    /// One category-scoped extraction call, degrading to per-record error
    /// statuses on failure.
    fn extract_category(
        &self,
        product_name: &str,
        category: &str,
        questions_config: &QuestionsConfig,
        context: &str,
        model: &str,
        result: &mut ProductExtractionResult,
    ) {
        let questions = questions_config.questions_for_category(category);
        if questions.is_empty() {
            info!("No questions for category '{}'. Skipping.", category);
            return;
        }

        info!(
            "Extracting answers for category: '{}' in product: {}",
            category, product_name
        );

        let messages = vec![
            ChatMessage::system(prompt::extraction_system_prompt(category)),
            ChatMessage::user(prompt::extraction_user_prompt(
                product_name,
                category,
                context,
                &questions,
            )),
        ];
        let request = ChatRequest::json(messages, model, self.config.max_answer_tokens);

        let response = match call_structured(&self.gateway, &request, &self.config) {
            Ok(response) => response,
            Err(e) => {
                error!(
                    "LLM call failed for category '{}', product '{}': {}",
                    category, product_name, e
                );
                for question in &questions {
                    result.upsert(AnswerRecord::new(
                        &question.id,
                        &question.text,
                        category,
                        LLM_FAILED_ANSWER,
                        AnswerStatus::ErrorLlm,
                    ));
                }
                return;
            }
        };

        match parse_answer_object(&response) {
            Some(answers) => {
                for question in &questions {
                    let answer = answers
                        .get(&question.id)
                        .map(value_to_answer)
                        .unwrap_or_else(|| ANSWER_NOT_FOUND.to_string());
                    result.upsert(AnswerRecord::new(
                        &question.id,
                        &question.text,
                        category,
                        answer,
                        AnswerStatus::Raw,
                    ));
                }
                info!(
                    "Extracted {} answers for category '{}', product '{}'.",
                    answers.len(),
                    category,
                    product_name
                );
            }
            None => {
                let preview: String = response.chars().take(500).collect();
                error!(
                    "Error parsing LLM response for '{}', '{}'. Response: {}",
                    category, product_name, preview
                );
                for question in &questions {
                    result.upsert(AnswerRecord::new(
                        &question.id,
                        &question.text,
                        category,
                        PARSING_FAILED_ANSWER,
                        AnswerStatus::ErrorParsing,
                    ));
                }
            }
        }
    }

    /// Re-present the document text plus previously extracted answers to
    /// the LLM and collect suggested corrections.
    ///
    /// An empty list means "no corrections needed" and is a success.
    pub fn review(
        &self,
        product_name: &str,
        answers: &[AnswerRecord],
        model: &str,
    ) -> Result<Vec<CorrectionSuggestion>, ExtractorError> {
        info!(
            "Starting self-correction review for product: {} using model {}.",
            product_name, model
        );

        let context = self.load_context(product_name)?;

        let messages = vec![
            ChatMessage::system(prompt::REVIEW_SYSTEM_PROMPT),
            ChatMessage::user(prompt::review_user_prompt(product_name, &context, answers)),
        ];
        let request = ChatRequest::json(messages, model, self.config.max_answer_tokens);

        let response = call_structured(&self.gateway, &request, &self.config)?;

        let corrections = parse_corrections(&response, product_name)?;
        info!(
            "Self-correction review for '{}' suggested {} corrections.",
            product_name,
            corrections.len()
        );
        Ok(corrections)
    }
}
