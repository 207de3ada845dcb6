//! Prompt assembly for category and question suggestion

/// System prompt for the category suggestion call.
pub(crate) const CATEGORIES_SYSTEM_PROMPT: &str =
    "You are an AI assistant specialized in analyzing insurance products. \
     Your task is to identify key coverage categories based on the provided \
     insurance terms documents.";

/// System prompt for the question suggestion call.
pub(crate) const QUESTIONS_SYSTEM_PROMPT: &str =
    "You are an AI assistant creating questions for comparing insurance products.";

/// User prompt asking for coverage categories from the combined corpus.
pub(crate) fn categories_user_prompt(sample_categories: &[String], corpus: &str) -> String {
    let sample_text = if sample_categories.is_empty() {
        String::new()
    } else {
        let list = sample_categories
            .iter()
            .map(|c| format!("- {}", c))
            .collect::<Vec<_>>()
            .join("\n");
        format!("Consider including these sample categories if relevant:\n{}", list)
    };

    format!(
        r#"Based on the following combined text from multiple insurance product documents, identify the main coverage categories typically found.
Focus on distinct insurable perils or sections of coverage.

Provide the output ONLY as a valid JSON object with a single key "categories" which is a list of unique category names (strings).
Example Format: {{"categories": ["Fire Damage", "Water Damage", "Theft/Burglary"]}}

Examples: {sample_text}

Combined Insurance Text:
{corpus}
"#
    )
}

/// User prompt asking for comparison questions scoped to the suggested
/// categories.
pub(crate) fn questions_user_prompt(
    categories: &[String],
    sample_questions: &[String],
    corpus: &str,
) -> String {
    let category_list = categories
        .iter()
        .map(|c| format!("- {}", c))
        .collect::<Vec<_>>()
        .join("\n");

    let sample_text = if sample_questions.is_empty() {
        String::new()
    } else {
        let list = sample_questions
            .iter()
            .map(|q| format!("- {}", q))
            .collect::<Vec<_>>()
            .join("\n");
        format!("Consider including these types of questions if relevant:\n{}", list)
    };

    let first_category = categories
        .first()
        .map(|c| format!("\"{}\"", c))
        .unwrap_or_else(|| "\"ExampleCategory\"".to_string());

    format!(
        r#"Generate comparison questions for the following categories:

{category_list}

Requirements:
1. Generate questions that can apply to multiple categories where appropriate.
2. For each category's core coverage, use the standard question: "Is this category covered under the insurance?"
3. Add questions about:
   - Coverage limits
   - Exclusions and conditions
   - Amounts and deductibles
   - Special terms or restrictions
4. Questions should be generic enough to work across different insurance products.
5. The category names in applies_to_categories must EXACTLY match the provided categories.
6. Generate a total of 20-30 questions across all categories.

{sample_text}

Provide ONLY a valid JSON object with key "questions" containing question objects.
Each question object must have:
- "text": The question text
- "applies_to_categories": List of EXACT category names from above list

Example format:
{{
    "questions": [
        {{"text": "Is this category covered under the insurance?", "applies_to_categories": [{first_category}]}},
        {{"text": "What is the maximum coverage amount?", "applies_to_categories": [{first_category}]}}
    ]
}}

Context from Insurance Documents:
{corpus}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_prompt_embeds_samples_and_corpus() {
        let prompt = categories_user_prompt(&["Dental".to_string()], "CORPUS TEXT");
        assert!(prompt.contains("- Dental"));
        assert!(prompt.contains("CORPUS TEXT"));
        assert!(prompt.contains(r#"single key "categories""#));
    }

    #[test]
    fn test_questions_prompt_embeds_category_list() {
        let categories = vec!["Dental".to_string(), "Optical".to_string()];
        let prompt = questions_user_prompt(&categories, &[], "CORPUS");
        assert!(prompt.contains("- Dental"));
        assert!(prompt.contains("- Optical"));
        assert!(prompt.contains("[\"Dental\"]"));
        assert!(prompt.contains("EXACTLY match"));
    }
}
