//! Filesystem-safe name sanitization

/// Clean a product or document name for use as a file or directory name.
///
/// Drops every character that is not alphanumeric, `_`, `-`, or
/// whitespace, trims the result, then collapses runs of whitespace and
/// hyphens into a single `_`.
pub fn clean_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut in_separator = false;
    for c in kept.trim().chars() {
        if c.is_whitespace() || c == '-' {
            in_separator = true;
        } else {
            if in_separator {
                out.push('_');
                in_separator = false;
            }
            out.push(c);
        }
    }
    out
}
