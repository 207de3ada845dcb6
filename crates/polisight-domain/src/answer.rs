//! Extracted answers and the per-product result set

use serde::{Deserialize, Serialize};

/// Provenance and review state of one extracted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    /// Freshly extracted, not yet reviewed
    Raw,

    /// The LLM call for this question's category failed after all retries
    ErrorLlm,

    /// The LLM response could not be parsed into the expected JSON object
    ErrorParsing,

    /// Produced by an extraction mode that is not implemented
    ErrorNotImplemented,

    /// Overwritten by an applied correction
    Corrected,

    /// Flagged for human review; advisory only, the answer is unchanged
    ReviewSuggested,
}

impl AnswerStatus {
    /// True for the error statuses a reviewer should look at first.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            AnswerStatus::ErrorLlm | AnswerStatus::ErrorParsing | AnswerStatus::ErrorNotImplemented
        )
    }
}

/// One extracted answer for a (product, question) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Id of the question this answers
    pub question_id: String,

    /// Denormalized copy of the question text
    pub question_text: String,

    /// Category under which this answer was extracted; fixed at creation
    pub category: String,

    /// The extracted (or corrected) answer text
    pub answer: String,

    /// Provenance status tag
    pub status: AnswerStatus,

    /// Why the answer was corrected, when status is `Corrected`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction_reason: Option<String>,
}

impl AnswerRecord {
    /// Create a new record with no correction reason.
    pub fn new(
        question_id: impl Into<String>,
        question_text: impl Into<String>,
        category: impl Into<String>,
        answer: impl Into<String>,
        status: AnswerStatus,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            question_text: question_text.into(),
            category: category.into(),
            answer: answer.into(),
            status,
            correction_reason: None,
        }
    }
}

/// The full answer set for one product.
///
/// Rewritten wholesale each time extraction or correction application
/// completes. Holds at most one record per question id: a later insert for
/// the same id replaces the earlier record in place, keeping its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductExtractionResult {
    /// Product these answers belong to
    pub product_name: String,

    /// Answer records, one per question id
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

impl ProductExtractionResult {
    /// Create an empty result for a product.
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            answers: Vec::new(),
        }
    }

    /// Insert a record, replacing any existing record with the same
    /// question id (last write wins, position preserved).
    pub fn upsert(&mut self, record: AnswerRecord) {
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == record.question_id)
        {
            Some(existing) => *existing = record,
            None => self.answers.push(record),
        }
    }

    /// Look up a record by question id.
    pub fn get(&self, question_id: &str) -> Option<&AnswerRecord> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    /// Flag a record for human review without touching its answer.
    ///
    /// Advisory only. Returns false when the question id is unknown.
    pub fn flag_for_review(&mut self, question_id: &str) -> bool {
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == question_id)
        {
            Some(record) => {
                record.status = AnswerStatus::ReviewSuggested;
                true
            }
            None => false,
        }
    }

    /// Count of records in an error status.
    pub fn error_count(&self) -> usize {
        self.answers.iter().filter(|a| a.status.is_error()).count()
    }
}
