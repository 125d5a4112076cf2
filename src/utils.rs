//! Common utility functions shared across the codebase.

/// Checks if every alphabetic character in the text is upper-case, and there
/// is at least one.
///
/// Upper-case-only values are treated as code constants (state names, enum
/// values) rather than prose, so they are never translated.
///
/// # Examples
///
/// ```
/// use hanloc::utils::is_all_upper_case;
///
/// assert!(is_all_upper_case("OK"));
/// assert!(is_all_upper_case("MQTT_ERROR"));
/// assert!(is_all_upper_case("HTTP 404"));
/// assert!(!is_all_upper_case("Ok"));
/// assert!(!is_all_upper_case("123"));
/// assert!(!is_all_upper_case(""));
/// ```
pub fn is_all_upper_case(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
