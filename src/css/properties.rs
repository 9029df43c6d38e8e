//! CSS declarations and `url()` tokens.

use super::escape::escape_string;

/// The value(s) of a CSS property.
///
/// Several values declare the property once per value, so that engines which
/// reject an earlier value fall back to a later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValues {
    Single(String),
    Fallbacks(Vec<String>),
}

impl PropertyValues {
    fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            PropertyValues::Single(value) => std::slice::from_ref(value),
            PropertyValues::Fallbacks(values) => values,
        };
        values.iter().map(String::as_str)
    }
}

impl From<&str> for PropertyValues {
    fn from(value: &str) -> Self {
        PropertyValues::Single(value.to_string())
    }
}

impl From<String> for PropertyValues {
    fn from(value: String) -> Self {
        PropertyValues::Single(value)
    }
}

impl From<Vec<String>> for PropertyValues {
    fn from(values: Vec<String>) -> Self {
        PropertyValues::Fallbacks(values)
    }
}

impl From<Vec<&str>> for PropertyValues {
    fn from(values: Vec<&str>) -> Self {
        PropertyValues::Fallbacks(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyValues {
    fn from(values: [&str; N]) -> Self {
        PropertyValues::Fallbacks(values.into_iter().map(str::to_string).collect())
    }
}

/// `url()` token wrapping a quoted, escaped string.
///
/// # Examples
///
/// ```
/// use markup_builder::css::build_url;
///
/// assert_eq!(build_url("hello 'world'.jpg"), r"url('hello \'world\'.jpg')");
/// ```
pub fn build_url(url: &str) -> String {
    format!("url({})", escape_string(url))
}

/// Declarations for one property, one `name:value` per value joined by `;`.
///
/// No CSS validation is performed.
///
/// # Examples
///
/// ```
/// use markup_builder::css::build_property;
///
/// assert_eq!(build_property("color", "red"), "color:red");
/// assert_eq!(build_property("height", ["100%", "100vh"]), "height:100%;height:100vh");
/// ```
pub fn build_property(name: &str, values: impl Into<PropertyValues>) -> String {
    let values = values.into();
    let entries: Vec<String> = values.iter().map(|value| format!("{name}:{value}")).collect();
    entries.join(";")
}

/// Declarations for several properties, in order, joined by `;`.
///
/// # Examples
///
/// ```
/// use markup_builder::css::{PropertyValues, build_properties};
///
/// let css = build_properties([
///     ("width", PropertyValues::from(["100%", "100vw"])),
///     ("color", "red".into()),
/// ]);
/// assert_eq!(css, "width:100%;width:100vw;color:red");
/// ```
pub fn build_properties<I, K, V>(properties: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<PropertyValues>,
{
    let entries: Vec<String> = properties
        .into_iter()
        .map(|(name, values)| build_property(name.as_ref(), values))
        .collect();
    entries.join(";")
}
