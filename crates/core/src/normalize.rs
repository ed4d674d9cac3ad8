//! Whitespace normalization for extracted text.

/// Collapses every whitespace run (newlines, tabs, no-break spaces included)
/// into a single space and trims both ends.
///
/// # Example
///
/// ```rust
/// use newsnex_core::normalize_text;
///
/// assert_eq!(normalize_text("  Jane\n\tDoe \u{a0} said "), "Jane Doe said");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
