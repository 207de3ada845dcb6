//! Correction suggestions produced by the self-review pass

use serde::{Deserialize, Serialize};

/// A targeted correction proposed by the self-correction reviewer.
///
/// Transient: suggestions exist only between the review pass and the merge
/// step. A suggestion is valid only when all four fields are present;
/// malformed raw items are discarded by the reviewer's parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionSuggestion {
    /// Id of the question whose answer should change
    pub question_id: String,

    /// The answer as it was extracted
    pub original_answer: String,

    /// The corrected or more complete answer
    pub suggested_correction: String,

    /// Brief justification citing the supporting document passage
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_requires_all_fields() {
        let full = r#"{
            "question_id": "q1",
            "original_answer": "Yes",
            "suggested_correction": "No, only above 100 EUR.",
            "reason": "Section 3.2 specifies a deductible."
        }"#;
        let suggestion: CorrectionSuggestion = serde_json::from_str(full).unwrap();
        assert_eq!(suggestion.question_id, "q1");

        let partial = r#"{"question_id": "q1", "reason": "missing fields"}"#;
        assert!(serde_json::from_str::<CorrectionSuggestion>(partial).is_err());
    }
}
