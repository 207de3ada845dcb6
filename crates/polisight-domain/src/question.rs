//! Comparison questions and their category scoping

use serde::{Deserialize, Serialize};

/// A single configured comparison question.
///
/// Questions are immutable once configured. Category names in
/// `applies_to_categories` must match the configured category list exactly
/// (case-sensitive); normalization happens at ingestion time, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique question identifier (e.g. "q001")
    pub id: String,

    /// The question text presented to the LLM
    pub text: String,

    /// Exact category names this question applies to, in configured order
    #[serde(default)]
    pub applies_to_categories: Vec<String>,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        applies_to_categories: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            applies_to_categories,
        }
    }

    /// Whether this question applies to the given category (exact match).
    pub fn applies_to(&self, category: &str) -> bool {
        self.applies_to_categories.iter().any(|c| c == category)
    }
}

/// Read-only question configuration supplied to the extraction core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsConfig {
    /// Configured categories, in extraction order
    #[serde(default)]
    pub categories: Vec<String>,

    /// Configured questions, in configured order
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionsConfig {
    /// True when there is nothing to extract (no categories or no questions).
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.questions.is_empty()
    }

    /// All questions applying to `category`, in configured order.
    pub fn questions_for_category(&self, category: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.applies_to(category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> QuestionsConfig {
        QuestionsConfig {
            categories: vec!["Dental".to_string(), "Optical".to_string()],
            questions: vec![
                Question::new("q1", "Is this category covered?", vec![
                    "Dental".to_string(),
                    "Optical".to_string(),
                ]),
                Question::new("q2", "What is the annual limit?", vec!["Dental".to_string()]),
            ],
        }
    }

    #[test]
    fn test_applies_to_exact_match() {
        let q = Question::new("q1", "text", vec!["Dental".to_string()]);
        assert!(q.applies_to("Dental"));
        assert!(!q.applies_to("dental"));
        assert!(!q.applies_to("Optical"));
    }

    #[test]
    fn test_questions_for_category() {
        let config = sample_config();
        let dental = config.questions_for_category("Dental");
        assert_eq!(dental.len(), 2);
        let optical = config.questions_for_category("Optical");
        assert_eq!(optical.len(), 1);
        assert_eq!(optical[0].id, "q1");
    }

    #[test]
    fn test_questions_for_unknown_category_is_empty() {
        let config = sample_config();
        assert!(config.questions_for_category("Travel").is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(QuestionsConfig::default().is_empty());

        let no_questions = QuestionsConfig {
            categories: vec!["Dental".to_string()],
            questions: vec![],
        };
        assert!(no_questions.is_empty());

        assert!(!sample_config().is_empty());
    }
}
