//! HTML attribute merging and formatting.
//!
//! Attribute sets are merged into one ordered mapping and then rendered
//! according to the shape of each attribute name:
//!
//! | Name shape            | `true`          | `false`          | `null`   | other         |
//! |-----------------------|-----------------|------------------|----------|---------------|
//! | `aria-*`              | `name="true"`   | `name="false"`   | `name=""`| `name="v"`    |
//! | contains `-`          | `name="1"`      | `name=""`        | `name=""`| `name="v"`    |
//! | anything else         | `name`          | omitted          | omitted  | `name="v"`    |
//!
//! Later sets override earlier ones, except for `class`, whose values are
//! concatenated.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::escape::escape;
use crate::error::{Error, Result};

/// Characters that may never appear in an attribute name.
///
/// See <https://www.w3.org/TR/2011/WD-html5-20110525/syntax.html#attributes-0>.
/// `<` is technically allowed but trips up some parsers.
const INVALID_ATTR_NAME_CHARS: [char; 12] = [
    ' ', '\t', '\n', '\u{0C}', '\r', '\0', '"', '\'', '>', '/', '=', '<',
];

/// A single attribute value.
#[derive(Clone)]
pub enum AttrValue {
    Bool(bool),
    Null,
    Int(i64),
    Float(f64),
    Str(String),
    /// A value rendered through its `Display` implementation at format time.
    Display(Arc<dyn fmt::Display + Send + Sync>),
}

impl AttrValue {
    /// Wrap any displayable value.
    pub fn display(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        AttrValue::Display(Arc::new(value))
    }

    /// String form of the value, before escaping.
    ///
    /// `true` becomes `"1"`, `false` and `Null` become the empty string.
    pub fn to_attr_string(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Bool(true) => Cow::Borrowed("1"),
            AttrValue::Bool(false) | AttrValue::Null => Cow::Borrowed(""),
            AttrValue::Int(n) => Cow::Owned(n.to_string()),
            AttrValue::Float(n) => Cow::Owned(n.to_string()),
            AttrValue::Str(s) => Cow::Borrowed(s),
            AttrValue::Display(d) => Cow::Owned(d.to_string()),
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "Bool({b})"),
            AttrValue::Null => write!(f, "Null"),
            AttrValue::Int(n) => write!(f, "Int({n})"),
            AttrValue::Float(n) => write!(f, "Float({n})"),
            AttrValue::Str(s) => write!(f, "Str({s:?})"),
            AttrValue::Display(d) => write!(f, "Display({:?})", d.to_string()),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Str(value.clone())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        AttrValue::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttrValue {
                fn from(value: $t) -> Self {
                    AttrValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => AttrValue::Int(n),
            Err(_) => AttrValue::Str(value.to_string()),
        }
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

/// One entry of an attribute set.
#[derive(Debug, Clone)]
pub enum AttrEntry {
    /// A named attribute with a value.
    Pair(String, AttrValue),
    /// A name with no value, equivalent to `(name, true)`.
    Bare(String),
}

impl AttrEntry {
    fn into_pair(self) -> (String, AttrValue) {
        match self {
            AttrEntry::Pair(name, value) => (name, value),
            AttrEntry::Bare(name) => (name, AttrValue::Bool(true)),
        }
    }
}

/// An ordered set of attributes.
///
/// # Example
///
/// ```
/// use markup_builder::html::{Attributes, build_attrs};
///
/// let attrs = Attributes::new()
///     .with("id", "main")
///     .with("hidden", true)
///     .bare("inert");
/// assert_eq!(build_attrs([attrs]).unwrap(), r#"id="main" hidden inert"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<AttrEntry>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a value-less attribute.
    pub fn bare(mut self, name: impl Into<String>) -> Self {
        self.entries.push(AttrEntry::Bare(name.into()));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.push(AttrEntry::Pair(name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttrEntry> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| AttrEntry::Pair(k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Attributes {
    type Item = AttrEntry;
    type IntoIter = std::vec::IntoIter<AttrEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// How an attribute is rendered, decided by the shape of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrKind {
    Aria,
    Custom,
    Standard,
}

impl AttrKind {
    fn of(name: &str) -> Self {
        match name {
            n if n.starts_with("aria-") => AttrKind::Aria,
            n if n.contains('-') => AttrKind::Custom,
            _ => AttrKind::Standard,
        }
    }
}

/// Merge attribute sets into one ordered mapping.
///
/// Keys keep the position of their first appearance. Later values replace
/// earlier ones, except `class`, where the values are joined with a space.
pub fn merge_attrs<I>(sets: I) -> IndexMap<String, AttrValue>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = AttrEntry>,
{
    let mut merged: IndexMap<String, AttrValue> = IndexMap::new();

    for set in sets {
        for entry in set {
            let (name, value) = entry.into_pair();
            match merged.get_mut(&name) {
                None => {
                    merged.insert(name, value);
                }
                Some(current) if name == "class" => {
                    let combined = add_classes(&current.to_attr_string(), [value.to_attr_string()]);
                    *current = AttrValue::Str(combined);
                }
                Some(current) => *current = value,
            }
        }
    }

    merged
}

/// Whether `name` can be used as an HTML attribute name.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.contains(INVALID_ATTR_NAME_CHARS)
}

/// Format attribute sets as an HTML attribute string.
///
/// - Standard attributes: `null`/`false` omit the attribute, `true` renders the
///   bare name.
/// - ARIA attributes: booleans render as `"true"`/`"false"`.
/// - Other hyphenated attributes: always rendered with a value.
///
/// Every value is HTML-escaped. Fails with [`Error::InvalidAttributeName`] if
/// any merged name contains a forbidden character.
///
/// # Example
///
/// ```
/// use markup_builder::html::{Attributes, build_attrs};
///
/// let base = Attributes::from([("class", "btn"), ("title", "Save")]);
/// let extra = Attributes::from([("class", "btn-primary"), ("title", "Save <all>")]);
/// assert_eq!(
///     build_attrs([base, extra]).unwrap(),
///     r#"class="btn btn-primary" title="Save &lt;all&gt;""#,
/// );
/// ```
pub fn build_attrs<I>(sets: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = AttrEntry>,
{
    let merged = merge_attrs(sets);

    if let Some(name) = merged.keys().find(|name| !is_valid_attr_name(name)) {
        log::debug!("rejecting attribute name {name:?}");
        return Err(Error::InvalidAttributeName(name.clone()));
    }

    let pairs: Vec<String> = merged
        .iter()
        .filter_map(|(name, value)| format_attr(name, value))
        .collect();
    Ok(pairs.join(" "))
}

/// Render a single attribute, or `None` if it should be omitted.
fn format_attr(name: &str, value: &AttrValue) -> Option<String> {
    let with_name = |v: &str| format!("{}=\"{}\"", name, escape(v));

    match AttrKind::of(name) {
        AttrKind::Aria => Some(match value {
            AttrValue::Bool(true) => with_name("true"),
            AttrValue::Bool(false) => with_name("false"),
            other => with_name(&other.to_attr_string()),
        }),
        AttrKind::Custom => Some(with_name(&value.to_attr_string())),
        AttrKind::Standard => match value {
            AttrValue::Bool(false) | AttrValue::Null => None,
            AttrValue::Bool(true) => Some(name.to_string()),
            other => Some(with_name(&other.to_attr_string())),
        },
    }
}

/// Build an HTML-safe class list from class names and their enabled flags.
///
/// # Example
///
/// ```
/// use markup_builder::html::build_classes;
///
/// assert_eq!(build_classes([("card", true), ("hidden", false), ("wide", true)]), "card wide");
/// ```
pub fn build_classes<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = (S, bool)>,
    S: AsRef<str>,
{
    let enabled: Vec<S> = classes
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect();
    let joined = enabled.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    escape(&joined)
}

/// Append class names to a space-separated class list.
///
/// The existing list is trimmed first. Nothing is deduplicated or escaped.
///
/// # Example
///
/// ```
/// use markup_builder::html::add_classes;
///
/// assert_eq!(add_classes("  card ", ["active"]), "card active");
/// assert_eq!(add_classes("", ["active"]), "active");
/// ```
pub fn add_classes<I, S>(class_list: &str, additional: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = class_list.trim().to_string();
    for class in additional {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(class.as_ref());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn attrs<const N: usize>(pairs: [(&str, AttrValue); N]) -> Attributes {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_single() {
        let result = build_attrs([Attributes::from([("hello", "world")])]).unwrap();
        assert_eq!(result, r#"hello="world""#);
    }

    #[test]
    fn test_multiple_values() {
        let result = build_attrs([Attributes::from([("hello", "world"), ("foo", "bar")])]).unwrap();
        assert_eq!(result, r#"hello="world" foo="bar""#);
    }

    #[test]
    fn test_multiple_sets_override() {
        let first = Attributes::from([("hello", "world"), ("foo", "bar")]);
        let second = Attributes::from([("hello", "overwritten")]);
        assert_eq!(
            build_attrs([first, second]).unwrap(),
            r#"hello="overwritten" foo="bar""#
        );
    }

    #[test]
    fn test_standard_booleans() {
        let set = attrs([
            ("hidden", true.into()),
            ("disabled", false.into()),
            ("checked", AttrValue::Null),
        ]);
        assert_eq!(build_attrs([set]).unwrap(), "hidden");
    }

    #[test]
    fn test_aria_booleans() {
        let set = attrs([("aria-hidden", true.into()), ("aria-disabled", false.into())]);
        assert_eq!(
            build_attrs([set]).unwrap(),
            r#"aria-hidden="true" aria-disabled="false""#
        );
    }

    #[test]
    fn test_other_data_types() {
        let set = attrs([
            ("data-int", 1i64.into()),
            ("data-float", 1.234f64.into()),
            ("data-bool", true.into()),
            ("data-stringable", AttrValue::display("value")),
        ]);
        assert_eq!(
            build_attrs([set]).unwrap(),
            r#"data-int="1" data-float="1.234" data-bool="1" data-stringable="value""#
        );
    }

    #[test]
    fn test_bare_attributes() {
        let set = Attributes::new().bare("disabled").bare("inert");
        assert_eq!(build_attrs([set]).unwrap(), "disabled inert");
    }

    #[test]
    fn test_bare_attribute_overridden_by_later_set() {
        let first = Attributes::new().bare("hidden");
        let second = Attributes::from([("hidden", false)]);
        assert_eq!(build_attrs([first, second]).unwrap(), "");
    }

    #[test]
    fn test_class_concatenation() {
        let first = Attributes::from([("class", " card  ")]);
        let second = Attributes::from([("class", "active")]);
        let third = Attributes::from([("class", "wide")]);
        assert_eq!(
            build_attrs([first, second, third]).unwrap(),
            r#"class="card active wide""#
        );
    }

    #[test]
    fn test_class_merge_after_null() {
        let first = attrs([("class", AttrValue::Null)]);
        let second = Attributes::from([("class", "active")]);
        assert_eq!(build_attrs([first, second]).unwrap(), r#"class="active""#);
    }

    #[test]
    fn test_style_is_overwritten_not_combined() {
        let first = Attributes::from([("style", "color:red")]);
        let second = Attributes::from([("style", "color:blue")]);
        assert_eq!(build_attrs([first, second]).unwrap(), r#"style="color:blue""#);
    }

    #[test]
    fn test_merge_keeps_first_position() {
        let first = Attributes::from([("a", "1"), ("b", "2")]);
        let second = Attributes::from([("c", "3"), ("a", "4")]);
        let merged = merge_attrs([first, second]);
        let keys: Vec<_> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(merged["a"].to_attr_string(), "4");
    }

    #[test]
    fn test_values_are_escaped() {
        let set = Attributes::from([("title", r#"<"quoted" & 'single'>"#)]);
        assert_eq!(
            build_attrs([set]).unwrap(),
            r#"title="&lt;&quot;quoted&quot; &amp; &apos;single&apos;&gt;""#
        );
    }

    #[test]
    fn test_invalid_names_rejected() {
        for name in ["on click", "a\tb", "x\"", "x'", "x>", "x/", "x=", "<x", "a\0"] {
            let set = Attributes::from([(name, "value")]);
            match build_attrs([set]) {
                Err(Error::InvalidAttributeName(n)) => assert_eq!(n, name),
                other => panic!("expected InvalidAttributeName for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_bare_name_rejected() {
        let set = Attributes::new().bare("bad name");
        assert!(matches!(
            build_attrs([set]),
            Err(Error::InvalidAttributeName(_))
        ));
    }

    #[test]
    fn test_no_sets() {
        assert_eq!(build_attrs(Vec::<Attributes>::new()).unwrap(), "");
    }

    #[test]
    fn test_option_values() {
        let set = attrs([("title", Some("x").into()), ("lang", None::<&str>.into())]);
        assert_eq!(build_attrs([set]).unwrap(), r#"title="x""#);
    }

    #[test]
    fn test_attr_kind_precedence() {
        assert_eq!(AttrKind::of("aria-label"), AttrKind::Aria);
        assert_eq!(AttrKind::of("data-aria-x"), AttrKind::Custom);
        assert_eq!(AttrKind::of("hidden"), AttrKind::Standard);
    }

    #[test]
    fn test_build_classes() {
        assert_eq!(build_classes([("hello-world", true)]), "hello-world");
        assert_eq!(
            build_classes([("hello-world", true), ("other-class", true)]),
            "hello-world other-class"
        );
        assert_eq!(
            build_classes([("hello-world", true), ("other-class", false)]),
            "hello-world"
        );
        assert_eq!(build_classes([("<b>", true)]), "&lt;b&gt;");
    }

    #[test]
    fn test_add_classes() {
        assert_eq!(add_classes("", Vec::<&str>::new()), "");
        assert_eq!(add_classes("example-class", Vec::<&str>::new()), "example-class");
        assert_eq!(add_classes("", ["additional-class"]), "additional-class");
        assert_eq!(
            add_classes("example-class", ["additional-class"]),
            "example-class additional-class"
        );
        assert_eq!(add_classes(" a ", ["b", "c"]), "a b c");
    }

    fn standard_name() -> impl Strategy<Value = String> {
        "[a-z]{1,10}"
    }

    proptest! {
        #[test]
        fn prop_standard_false_and_null_are_omitted(name in standard_name()) {
            let set = attrs([(name.as_str(), false.into())]);
            prop_assert_eq!(build_attrs([set]).unwrap(), "");
            let set = attrs([(name.as_str(), AttrValue::Null)]);
            prop_assert_eq!(build_attrs([set]).unwrap(), "");
        }

        #[test]
        fn prop_standard_true_is_bare(name in standard_name()) {
            let set = attrs([(name.as_str(), true.into())]);
            prop_assert_eq!(build_attrs([set]).unwrap(), name);
        }

        #[test]
        fn prop_aria_booleans_are_literal(suffix in "[a-z]{1,10}", flag in any::<bool>()) {
            let name = format!("aria-{suffix}");
            let set = attrs([(name.as_str(), flag.into())]);
            prop_assert_eq!(build_attrs([set]).unwrap(), format!("{name}=\"{flag}\""));
        }

        #[test]
        fn prop_custom_attributes_always_have_value(
            prefix in "[a-z]{1,6}",
            suffix in "[a-z]{1,6}",
            flag in any::<bool>(),
        ) {
            prop_assume!(prefix != "aria");
            let name = format!("{prefix}-{suffix}");
            let set = attrs([(name.as_str(), flag.into())]);
            let rendered = build_attrs([set]).unwrap();
            let expected = format!("{}=\"{}\"", name, if flag { "1" } else { "" });
            prop_assert_eq!(rendered, expected);
        }

        #[test]
        fn prop_last_value_wins(name in "[a-z]{1,8}", values in prop::collection::vec("[a-z0-9]{1,5}", 1..5)) {
            prop_assume!(name != "class");
            let sets: Vec<Attributes> = values
                .iter()
                .map(|v| Attributes::from([(name.as_str(), v.as_str())]))
                .collect();
            let expected = format!("{}=\"{}\"", name, values.last().unwrap());
            prop_assert_eq!(build_attrs(sets).unwrap(), expected);
        }

        #[test]
        fn prop_class_values_concatenate(values in prop::collection::vec("[a-z]{1,5}", 1..5)) {
            let sets: Vec<Attributes> = values
                .iter()
                .map(|v| Attributes::from([("class", v.as_str())]))
                .collect();
            let expected = format!("class=\"{}\"", values.join(" "));
            prop_assert_eq!(build_attrs(sets).unwrap(), expected);
        }
    }
}
