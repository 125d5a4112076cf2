//! Placeholder extraction and marker substitution.
//!
//! Translation values may embed runtime-substituted placeholders in three
//! surface syntaxes: `{name}`, `%count`, and `${var}`. Placeholders are
//! opaque: they are never sent to the translation backend and must come back
//! verbatim and in their original order.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `{...}`, a `%`-prefixed word token, or `${...}`.
/// Alternatives are tried leftmost-first, matches are non-overlapping.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}|%\w+|\$\{[^}]+\}").unwrap());

/// Extract all placeholders from `text`, in scan order.
///
/// # Examples
///
/// ```
/// use hanloc::placeholder::extract;
///
/// assert_eq!(extract("Hello {name}"), vec!["{name}"]);
/// assert_eq!(extract("%count of ${total}"), vec!["%count", "${total}"]);
/// assert!(extract("no placeholders here").is_empty());
/// ```
pub fn extract(text: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether the trimmed text is nothing but a single placeholder.
pub fn is_placeholder_only(text: &str) -> bool {
    let trimmed = text.trim();
    PLACEHOLDER_REGEX
        .find(trimmed)
        .is_some_and(|m| m.start() == 0 && m.end() == trimmed.len())
}

/// Replace each placeholder with a positional marker token.
///
/// Returns the masked text and the ordered original placeholders. Markers are
/// `__PLACEHOLDER_0__`, `__PLACEHOLDER_1__`, ... — tokens a translation
/// backend is expected to pass through untouched. Source text that already
/// contains a literal marker-like substring is an accepted limitation.
pub fn mask(text: &str) -> (String, Vec<String>) {
    let mut masked = String::with_capacity(text.len());
    let mut placeholders = Vec::new();
    let mut last_end = 0;

    for m in PLACEHOLDER_REGEX.find_iter(text) {
        masked.push_str(&text[last_end..m.start()]);
        masked.push_str(&marker(placeholders.len()));
        placeholders.push(m.as_str().to_string());
        last_end = m.end();
    }
    masked.push_str(&text[last_end..]);

    (masked, placeholders)
}

/// Substitute markers back with their original placeholders.
///
/// Restoration goes by marker identity, not by searching for the placeholder
/// text, so placeholders are restored exactly even when the backend rewrote
/// all surrounding prose.
pub fn restore(text: &str, placeholders: &[String]) -> String {
    let mut restored = text.to_string();
    for (index, placeholder) in placeholders.iter().enumerate() {
        restored = restored.replace(&marker(index), placeholder);
    }
    restored
}

fn marker(index: usize) -> String {
    format!("__PLACEHOLDER_{}__", index)
}
