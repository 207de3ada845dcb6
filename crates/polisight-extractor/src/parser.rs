//! Parsing of structured LLM responses
//!
//! Decode strategy: attempt a direct JSON parse first; only when that
//! fails, strip one markdown code-fence wrapper and try once more. Never
//! loops.

use crate::error::ExtractorError;
use polisight_domain::CorrectionSuggestion;
use serde_json::{Map, Value};
use tracing::warn;

/// Parse a response leniently, tolerating one markdown code-fence wrapper.
pub(crate) fn parse_json_lenient(response: &str) -> Result<Value, serde_json::Error> {
    let trimmed = response.trim();
    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(direct_err) => match strip_code_fence(trimmed) {
            Some(inner) => serde_json::from_str(inner.trim()),
            None => Err(direct_err),
        },
    }
}

/// Strip a single ```/```json fence, returning the inner text.
fn strip_code_fence(text: &str) -> Option<String> {
    if !text.starts_with("```") {
        return None;
    }
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return None;
    }
    // Skip the opening ``` / ```json line and the closing ``` line
    let end = if lines[lines.len() - 1].trim() == "```" {
        lines.len() - 1
    } else {
        lines.len()
    };
    Some(lines[1..end].join("\n"))
}

/// Parse an extraction response into a question-id → answer map.
///
/// `None` when the response is not decodable JSON or not an object.
pub(crate) fn parse_answer_object(response: &str) -> Option<Map<String, Value>> {
    match parse_json_lenient(response) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(_) => None,
    }
}

/// Render a JSON value as an answer string.
///
/// Strings are taken verbatim; any other value keeps its JSON rendering.
pub(crate) fn value_to_answer(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse a self-review response shaped `{"corrections": [...]}`.
///
/// The top-level key must be present and be an array, otherwise the whole
/// review fails. Individual malformed items are discarded with a warning.
pub(crate) fn parse_corrections(
    response: &str,
    product_name: &str,
) -> Result<Vec<CorrectionSuggestion>, ExtractorError> {
    let value = parse_json_lenient(response)
        .map_err(|e| ExtractorError::MalformedCorrections(e.to_string()))?;

    let items = value
        .get("corrections")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ExtractorError::MalformedCorrections(
                "missing or non-array 'corrections' key".to_string(),
            )
        })?;

    let mut valid = Vec::new();
    for item in items {
        match serde_json::from_value::<CorrectionSuggestion>(item.clone()) {
            Ok(suggestion) => valid.push(suggestion),
            Err(_) => warn!(
                "Malformed correction item ignored for '{}': {}",
                product_name, item
            ),
        }
    }
    Ok(valid)
}
