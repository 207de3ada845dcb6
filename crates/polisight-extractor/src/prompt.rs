//! LLM prompt assembly for extraction and self-review

use polisight_domain::{AnswerRecord, Question};

/// System prompt for a category-scoped extraction call.
pub(crate) fn extraction_system_prompt(category: &str) -> String {
    format!(
        "You are an AI assistant extracting information from insurance product terms. \
         Focus specifically on the category: '{}'. \
         Answer precisely based on the provided document excerpts.",
        category
    )
}

/// User prompt for a category-scoped extraction call.
///
/// Embeds the product name, category, truncated document text, and an
/// enumerated `(id, text)` list of the category's questions.
pub(crate) fn extraction_user_prompt(
    product_name: &str,
    category: &str,
    document_text: &str,
    questions: &[&Question],
) -> String {
    let question_list = questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. (ID: {}) {}", i + 1, q.id, q.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Based *only* on the provided insurance document text for product '{product_name}', answer the following questions related to the '{category}' category.
If information for a question is not found, state 'Not Found' or 'Not Specified'.

Document Text:
---
{document_text}
---

Questions for category '{category}':
{question_list}

Provide your answers ONLY as a valid JSON object. The JSON object should map each question ID (e.g., "q1", "q2") to its answer (string).
Example format: {{ "q1": "Yes", "q5": "5000 EUR", "q7": "" }}
Important: Answer as concisely as possible. Respond in keywords / note form. If a question is not applicable, return empty string.

Ensure all question IDs listed above are present as keys in your JSON response.
"#
    )
}

/// System prompt for the self-correction review call.
pub(crate) const REVIEW_SYSTEM_PROMPT: &str =
    "You are an expert AI assistant reviewing extracted information from insurance terms. \
     Your goal is to identify inaccuracies or incomplete answers by cross-referencing \
     with the original document text.";

/// User prompt for the self-correction review call, listing every current
/// answer with its category, id, question text, and extracted value.
pub(crate) fn review_user_prompt(
    product_name: &str,
    document_text: &str,
    answers: &[AnswerRecord],
) -> String {
    let answer_list = answers
        .iter()
        .enumerate()
        .map(|(i, a)| {
            format!(
                "{}. Category: {}\n   Question (ID: {}): {}\n   Extracted Answer: {}\n",
                i + 1,
                a.category,
                a.question_id,
                a.question_text,
                a.answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Please review the following extracted answers for the insurance product '{product_name}' against the provided document text.
For each extracted answer, verify its accuracy. If you find any mistakes, incorrect interpretations, or significantly incomplete answers, please list them.

Document Text for '{product_name}':
---
{document_text}
---

Extracted Answers to Review:
---
{answer_list}
---

Provide your review ONLY as a valid JSON object with a single key "corrections".
The "corrections" key should be a list of objects. Each object should have:
- "question_id": The ID of the question whose answer needs correction.
- "original_answer": The original extracted answer.
- "suggested_correction": Your corrected or more complete answer (string).
- "reason": A brief explanation citing the part of the document that supports your correction (e.g., "Document section X states Y...").

If an answer is correct and complete, do not include it in the "corrections" list.
If all answers are correct, return an empty list for "corrections", i.e., {{"corrections": []}}.
Example: {{"corrections": [{{"question_id": "q1", "original_answer": "Yes", "suggested_correction": "No, only for damages above 100 EUR.", "reason": "Section 3.2 specifies a deductible of 100 EUR for this coverage."}}]}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use polisight_domain::AnswerStatus;

    #[test]
    fn test_extraction_prompt_embeds_all_parts() {
        let q1 = Question::new("q1", "Is dental covered?", vec!["Dental".to_string()]);
        let q2 = Question::new("q2", "What is the limit?", vec!["Dental".to_string()]);

        let prompt = extraction_user_prompt("AlphaCare", "Dental", "DOC TEXT", &[&q1, &q2]);

        assert!(prompt.contains("product 'AlphaCare'"));
        assert!(prompt.contains("'Dental' category"));
        assert!(prompt.contains("DOC TEXT"));
        assert!(prompt.contains("1. (ID: q1) Is dental covered?"));
        assert!(prompt.contains("2. (ID: q2) What is the limit?"));
        assert!(prompt.contains("valid JSON object"));
    }

    #[test]
    fn test_extraction_system_prompt_names_category() {
        let prompt = extraction_system_prompt("Fire Damage");
        assert!(prompt.contains("'Fire Damage'"));
    }

    #[test]
    fn test_review_prompt_lists_answers() {
        let answers = vec![
            AnswerRecord::new("q1", "Is dental covered?", "Dental", "Yes", AnswerStatus::Raw),
            AnswerRecord::new("q2", "What is the limit?", "Dental", "500 CHF", AnswerStatus::Raw),
        ];

        let prompt = review_user_prompt("AlphaCare", "DOC TEXT", &answers);

        assert!(prompt.contains("1. Category: Dental"));
        assert!(prompt.contains("Question (ID: q1): Is dental covered?"));
        assert!(prompt.contains("Extracted Answer: 500 CHF"));
        assert!(prompt.contains(r#"single key "corrections""#));
        assert!(prompt.contains("DOC TEXT"));
    }
}
