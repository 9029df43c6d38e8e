//! HTML escaping primitives.
//!
//! These functions turn arbitrary text into something that can be placed
//! inside HTML text content or a quoted attribute value, and back again.

use std::borrow::Cow;
use std::io;

use memchr::memchr;
use quick_xml::escape::resolve_html5_entity;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

/// Longest reference we look at when searching for the closing `;`.
const MAX_REFERENCE_LEN: usize = 40;

/// Escape a string for safe use in an HTML document.
///
/// The five HTML-special characters are replaced with their HTML5 named
/// references, and characters that may not appear in an HTML5 document are
/// replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use markup_builder::html::escape;
///
/// assert_eq!(escape("Hello world."), "Hello world.");
/// assert_eq!(escape("<b>'a' & \"b\"</b>"), "&lt;b&gt;&apos;a&apos; &amp; &quot;b&quot;&lt;/b&gt;");
/// ```
pub fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + value.len() / 8);
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            c if is_disallowed(c) => result.push(char::REPLACEMENT_CHARACTER),
            _ => result.push(c),
        }
    }
    result
}

/// Decode HTML character references in a string.
///
/// Named HTML5 references and decimal/hexadecimal numeric references are
/// decoded. Anything that does not form a valid reference is left as-is.
///
/// # Examples
///
/// ```
/// use markup_builder::html::unescape;
///
/// assert_eq!(unescape("&lt;p&gt; &amp;amp; &#39;x&#x27;"), "<p> &amp; 'x'");
/// assert_eq!(unescape("fish & chips"), "fish & chips");
/// ```
pub fn unescape(value: &str) -> Cow<'_, str> {
    let Some(first) = memchr(b'&', value.as_bytes()) else {
        return Cow::Borrowed(value);
    };

    let mut result = String::with_capacity(value.len());
    result.push_str(&value[..first]);
    let mut rest = &value[first..];

    loop {
        // `rest` always starts with '&' here
        match decode_reference(rest, &mut result) {
            Some(consumed) => rest = &rest[consumed..],
            None => {
                result.push('&');
                rest = &rest[1..];
            }
        }

        match memchr(b'&', rest.as_bytes()) {
            Some(next) => {
                result.push_str(&rest[..next]);
                rest = &rest[next..];
            }
            None => {
                result.push_str(rest);
                break;
            }
        }
    }

    Cow::Owned(result)
}

/// Decode the reference at the start of `input` into `out`.
///
/// Returns the number of bytes consumed, or `None` if `input` does not start
/// with a complete, known reference.
fn decode_reference(input: &str, out: &mut String) -> Option<usize> {
    let bytes = input.as_bytes();
    let window = &bytes[1..bytes.len().min(MAX_REFERENCE_LEN)];
    let end = memchr(b';', window)?;
    let name = &input[1..1 + end];

    if let Some(number) = name.strip_prefix('#') {
        // `from_str_radix` alone would accept a leading sign
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) if is_number(hex, u8::is_ascii_hexdigit) => {
                u32::from_str_radix(hex, 16).ok()?
            }
            None if is_number(number, u8::is_ascii_digit) => number.parse::<u32>().ok()?,
            _ => return None,
        };
        let c = char::from_u32(code).filter(|&c| c != '\0')?;
        out.push(c);
    } else {
        out.push_str(resolve_html5_entity(name)?);
    }

    Some(end + 2)
}

fn is_number(digits: &str, is_digit: fn(&u8) -> bool) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| is_digit(&b))
}

/// Whether a character is not allowed to appear in an HTML5 document.
fn is_disallowed(c: char) -> bool {
    match c {
        '\t' | '\n' | '\u{0C}' | '\r' => false,
        '\u{00}'..='\u{1F}' | '\u{7F}'..='\u{9F}' => true,
        '\u{FDD0}'..='\u{FDEF}' => true,
        c => (c as u32) & 0xFFFE == 0xFFFE,
    }
}

/// Options controlling JSON serialization for inline literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOptions {
    /// Pretty-print with four-space indentation.
    pub pretty: bool,
}

impl JsonOptions {
    /// Pretty-printed output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Encode a value as a JavaScript literal for an inline `<script>` element.
///
/// The value is serialized as JSON (slashes and unicode left unescaped) and
/// angle brackets are replaced so the literal can never close the script.
///
/// # Examples
///
/// ```
/// use markup_builder::html::{JsonOptions, escape_js_value};
///
/// let js = escape_js_value("</script>", JsonOptions::default()).unwrap();
/// assert_eq!(js, "\"&lt;/script&gt;\"");
/// ```
pub fn escape_js_value<T: Serialize + ?Sized>(value: &T, options: JsonOptions) -> Result<String> {
    let json = to_json(value, options)?;
    Ok(json.replace('<', "&lt;").replace('>', "&gt;"))
}

/// Encode a value as JSON fully escaped for a quoted HTML attribute.
///
/// # Examples
///
/// ```
/// use markup_builder::html::{JsonOptions, escape_json};
///
/// let json = escape_json(&["a", "b"], JsonOptions::default()).unwrap();
/// assert_eq!(json, "[&quot;a&quot;,&quot;b&quot;]");
/// ```
pub fn escape_json<T: Serialize + ?Sized>(value: &T, options: JsonOptions) -> Result<String> {
    Ok(escape(&to_json(value, options)?))
}

fn to_json<T: Serialize + ?Sized>(value: &T, options: JsonOptions) -> Result<String> {
    if !options.pretty {
        return Ok(serde_json::to_string(value)?);
    }

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
