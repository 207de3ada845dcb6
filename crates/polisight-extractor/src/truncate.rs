//! Context truncation for aggregated document text

use tracing::warn;

/// Marker appended to truncated document text
pub const TRUNCATION_MARKER: &str = "\n...[DOCUMENT TRUNCATED]";

/// Caps aggregated document text to a fixed character budget.
#[derive(Debug, Clone, Copy)]
pub struct ContextTruncator {
    limit: usize,
}

impl ContextTruncator {
    /// Create a truncator with the given character budget.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Whether `text` exceeds the budget, plus its character length.
    ///
    /// Lets callers report document-size health without running an
    /// extraction.
    pub fn exceeds_limit(&self, text: &str) -> (bool, usize) {
        let len = text.chars().count();
        (len > self.limit, len)
    }

    /// Return `text` unchanged when within budget; otherwise the first
    /// `limit` characters followed by [`TRUNCATION_MARKER`].
    pub fn truncate(&self, text: &str, product_name: &str) -> String {
        let (exceeds, len) = self.exceeds_limit(text);
        if !exceeds {
            return text.to_string();
        }

        warn!(
            "Document text for {} truncated. Original size: {} chars, limit: {} chars.",
            product_name, len, self.limit
        );

        let cut = text
            .char_indices()
            .nth(self.limit)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(text.len());
        format!("{}{}", &text[..cut], TRUNCATION_MARKER)
    }
}
