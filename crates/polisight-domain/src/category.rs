//! Category name normalization
//!
//! Applied at ingestion time, when categories and question scopes arrive
//! from an LLM suggestion pass. The extraction core itself matches category
//! names exactly and never normalizes.

/// Normalize a category name to its canonical form.
///
/// Rules, applied in order:
/// 1. trim surrounding whitespace
/// 2. lowercase
/// 3. replace `/` with ` and ` (so "Theft/Burglary" and "Theft / Burglary"
///    converge)
/// 4. collapse whitespace runs and Title Case each word
///
/// `normalize_category("theft/burglary")` == `"Theft And Burglary"`.
pub fn normalize_category(name: &str) -> String {
    let lowered = name.trim().to_lowercase().replace('/', " and ");

    let mut out = String::with_capacity(lowered.len());
    for word in lowered.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
