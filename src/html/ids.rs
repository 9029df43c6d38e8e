//! Rewriting ID and ID-referencing attribute values in HTML fragments.
//!
//! This works on the raw text with a regular expression rather than a parse
//! tree, so attribute-like text inside scripts, comments or other attribute
//! values will be rewritten too.

use regex_lite::{Captures, Regex};

use super::escape::{escape, unescape};
use super::patterns::{ID_ATTRIBUTES, id_attribute_pattern};
use crate::error::Result;

/// Apply `transformer` to every ID and ID-referencing attribute value.
///
/// The attributes processed are `id`, `for`, `aria-labelledby` and
/// `aria-describedby`, plus any `additional_attributes`. Names are matched
/// case-insensitively. The transformer receives the decoded value (`a&amp;b`
/// arrives as `a&b`, not the raw attribute text) and the attribute name as
/// written; its result is escaped and written back inside the original quotes,
/// so references are never escaped twice. Values spanning a line break are
/// left alone.
///
/// # Examples
///
/// ```
/// use markup_builder::html::map_html_ids;
///
/// let html = r#"<label for="name">Name</label><input id="name">"#;
/// let mapped = map_html_ids(html, |id, _| format!("form-{id}"), &[]).unwrap();
/// assert_eq!(mapped, r#"<label for="form-name">Name</label><input id="form-name">"#);
/// ```
pub fn map_html_ids<F>(html: &str, mut transformer: F, additional_attributes: &[&str]) -> Result<String>
where
    F: FnMut(&str, &str) -> String,
{
    let names = ID_ATTRIBUTES
        .iter()
        .chain(additional_attributes)
        .copied();
    let re = Regex::new(&id_attribute_pattern(names))?;

    let mapped = re.replace_all(html, |caps: &Captures| {
        let name = &caps[1];
        let (quote, raw) = match caps.get(2) {
            Some(value) => ('"', value.as_str()),
            None => ('\'', caps.get(3).map_or("", |m| m.as_str())),
        };
        let value = transformer(&unescape(raw), name);
        format!("{}={quote}{}{quote}", escape(name), escape(&value))
    });

    Ok(mapped.into_owned())
}
