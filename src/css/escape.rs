//! CSS string escaping.

/// Quote a value as a CSS string literal.
///
/// The value is wrapped in single quotes with backslashes and single quotes
/// escaped.
///
/// # Examples
///
/// ```
/// use markup_builder::css::escape_string;
///
/// assert_eq!(escape_string("hello world"), "'hello world'");
/// assert_eq!(escape_string(r"it's a\b"), r"'it\'s a\\b'");
/// ```
pub fn escape_string(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('\'');
    for c in value.chars() {
        if matches!(c, '\\' | '\'') {
            result.push('\\');
        }
        result.push(c);
    }
    result.push('\'');
    result
}
