//! Deterministic merge of correction suggestions into an answer list

use polisight_domain::{AnswerRecord, AnswerStatus, CorrectionSuggestion};
use std::collections::HashMap;
use tracing::{info, warn};

/// Reason recorded when a correction carries an empty reason
pub const DEFAULT_CORRECTION_REASON: &str = "No reason provided.";

/// Apply suggested corrections to an answer list.
///
/// Pure and total: corrections targeting unknown question ids are
/// discarded with a warning and never create new records. The output
/// keeps every original record in its original order, corrected or
/// untouched. Applying the same corrections twice yields the same result
/// as applying them once.
pub fn apply_corrections(
    original_answers: &[AnswerRecord],
    corrections: &[CorrectionSuggestion],
    product_name: &str,
) -> Vec<AnswerRecord> {
    info!(
        "Applying {} corrections for product: {}.",
        corrections.len(),
        product_name
    );

    let mut updated: Vec<AnswerRecord> = original_answers.to_vec();
    let index: HashMap<&str, usize> = original_answers
        .iter()
        .enumerate()
        .map(|(i, a)| (a.question_id.as_str(), i))
        .collect();

    for correction in corrections {
        match index.get(correction.question_id.as_str()) {
            Some(&i) => {
                info!(
                    "Applying correction for {} in {}: '{}' -> '{}'",
                    correction.question_id,
                    product_name,
                    updated[i].answer,
                    correction.suggested_correction
                );
                updated[i].answer = correction.suggested_correction.clone();
                updated[i].status = AnswerStatus::Corrected;
                updated[i].correction_reason = Some(if correction.reason.is_empty() {
                    DEFAULT_CORRECTION_REASON.to_string()
                } else {
                    correction.reason.clone()
                });
            }
            None => {
                warn!(
                    "Correction for non-existent question id {} in {}. Ignoring.",
                    correction.question_id, product_name
                );
            }
        }
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Vec<AnswerRecord> {
        vec![
            AnswerRecord::new("q1", "Is dental covered?", "Dental", "Yes", AnswerStatus::Raw),
            AnswerRecord::new("q2", "What is the limit?", "Dental", "500 CHF", AnswerStatus::Raw),
        ]
    }

    fn correction(id: &str, suggestion: &str, reason: &str) -> CorrectionSuggestion {
        CorrectionSuggestion {
            question_id: id.to_string(),
            original_answer: "Yes".to_string(),
            suggested_correction: suggestion.to_string(),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_empty_corrections_is_identity() {
        let original = answers();
        let updated = apply_corrections(&original, &[], "AlphaCare");
        assert_eq!(updated, original);
    }

    #[test]
    fn test_correction_overwrites_answer_and_status() {
        let corrections = vec![correction("q1", "No, excluded", "Section 2 excludes it.")];
        let updated = apply_corrections(&answers(), &corrections, "AlphaCare");

        assert_eq!(updated[0].answer, "No, excluded");
        assert_eq!(updated[0].status, AnswerStatus::Corrected);
        assert_eq!(
            updated[0].correction_reason.as_deref(),
            Some("Section 2 excludes it.")
        );
        // Category and question text are never recomputed
        assert_eq!(updated[0].category, "Dental");
        assert_eq!(updated[0].question_text, "Is dental covered?");
        // Untouched record keeps its state
        assert_eq!(updated[1], answers()[1]);
    }

    #[test]
    fn test_unknown_target_discarded() {
        let corrections = vec![correction("q99", "whatever", "no such question")];
        let updated = apply_corrections(&answers(), &corrections, "AlphaCare");

        assert_eq!(updated, answers());
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn test_reapplication_is_idempotent() {
        let corrections = vec![
            correction("q1", "No, excluded", "Section 2."),
            correction("q2", "1000 CHF", "Section 4 raises the limit."),
        ];

        let once = apply_corrections(&answers(), &corrections, "AlphaCare");
        let twice = apply_corrections(&once, &corrections, "AlphaCare");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_reason_gets_default() {
        let corrections = vec![correction("q1", "No", "")];
        let updated = apply_corrections(&answers(), &corrections, "AlphaCare");
        assert_eq!(
            updated[0].correction_reason.as_deref(),
            Some(DEFAULT_CORRECTION_REASON)
        );
    }

    #[test]
    fn test_last_correction_wins_for_same_target() {
        let corrections = vec![
            correction("q1", "first", "a"),
            correction("q1", "second", "b"),
        ];
        let updated = apply_corrections(&answers(), &corrections, "AlphaCare");
        assert_eq!(updated[0].answer, "second");
        assert_eq!(updated[0].correction_reason.as_deref(), Some("b"));
    }

    #[test]
    fn test_original_order_preserved() {
        let corrections = vec![correction("q2", "1000 CHF", "Section 4.")];
        let updated = apply_corrections(&answers(), &corrections, "AlphaCare");
        let ids: Vec<&str> = updated.iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2"]);
    }
}
