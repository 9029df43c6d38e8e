//! Wrapping plain text in HTML elements.

use regex_lite::Captures;

use super::escape::escape;
use super::patterns::{OPEN_TAG_RE, PARAGRAPH_BREAK_RE, WORD_RE};

/// Opening and closing tags used to wrap text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WrappingTag {
    open: String,
    close: String,
}

impl WrappingTag {
    /// Parse either a full opening tag (`<p class="lead">`) or a bare tag name (`p`).
    ///
    /// A full opening tag is used verbatim; a bare name is escaped.
    fn parse(tag: &str) -> Self {
        if let Some(caps) = OPEN_TAG_RE.captures(tag) {
            return Self {
                open: tag.to_string(),
                close: format!("</{}>", &caps[1]),
            };
        }

        let name = escape(tag);
        Self {
            open: format!("<{name}>"),
            close: format!("</{name}>"),
        }
    }

    fn wrap(&self, content: &str) -> String {
        format!("{}{}{}", self.open, escape(content), self.close)
    }
}

/// Wrap each paragraph of plain text in an HTML element.
///
/// Paragraphs are separated by two or more line breaks. Surrounding whitespace
/// is trimmed from every line and empty paragraphs are dropped. The text is
/// escaped; the tag is not.
///
/// # Examples
///
/// ```
/// use markup_builder::html::wrap_paragraphs;
///
/// assert_eq!(
///     wrap_paragraphs("First.\n\n  Second.  ", "<p class=\"lead\">"),
///     r#"<p class="lead">First.</p><p class="lead">Second.</p>"#,
/// );
/// ```
pub fn wrap_paragraphs(text: &str, wrapping_tag: &str) -> String {
    let tag = WrappingTag::parse(wrapping_tag);

    PARAGRAPH_BREAK_RE
        .split(text.trim())
        .map(|paragraph| {
            paragraph
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| tag.wrap(&paragraph))
        .collect()
}

/// Wrap each word of plain text in an HTML element, preserving whitespace.
///
/// # Examples
///
/// ```
/// use markup_builder::html::wrap_words;
///
/// assert_eq!(wrap_words("Hello world.", "span"), "<span>Hello</span> <span>world.</span>");
/// ```
pub fn wrap_words(text: &str, wrapping_tag: &str) -> String {
    let tag = WrappingTag::parse(wrapping_tag);

    WORD_RE
        .replace_all(text, |caps: &Captures| tag.wrap(&caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_tag() {
        let tag = WrappingTag::parse(r#"<p class="test">"#);
        assert_eq!(tag.open, r#"<p class="test">"#);
        assert_eq!(tag.close, "</p>");
    }

    #[test]
    fn test_parse_custom_element_tag() {
        let tag = WrappingTag::parse("<my-element>");
        assert_eq!(tag.close, "</my-element>");
    }

    #[test]
    fn test_parse_bare_name_is_escaped() {
        let tag = WrappingTag::parse("span");
        assert_eq!(tag.open, "<span>");
        assert_eq!(tag.close, "</span>");

        let tag = WrappingTag::parse("a\"b");
        assert_eq!(tag.open, "<a&quot;b>");
    }

    #[test]
    fn test_wrap_single_paragraph() {
        assert_eq!(wrap_paragraphs("Hello world.", "<p>"), "<p>Hello world.</p>");
    }

    #[test]
    fn test_wrap_multiple_paragraphs() {
        assert_eq!(
            wrap_paragraphs("Hello world.\n\nAnother paragraph.", "<p>"),
            "<p>Hello world.</p><p>Another paragraph.</p>"
        );
    }

    #[test]
    fn test_wrap_paragraphs_custom_attributes() {
        assert_eq!(
            wrap_paragraphs("Hello world.", r#"<p class="test">"#),
            r#"<p class="test">Hello world.</p>"#
        );
    }

    #[test]
    fn test_wrap_paragraphs_trims_whitespace() {
        let text = "\n\nHello world.    \n\n\n\n     Another paragraph.    \n\n\n\n";
        assert_eq!(
            wrap_paragraphs(text, "<p>"),
            "<p>Hello world.</p><p>Another paragraph.</p>"
        );
    }

    #[test]
    fn test_wrap_paragraphs_keeps_single_line_breaks() {
        assert_eq!(
            wrap_paragraphs("  line one  \n   line two\r\n\r\nnext", "<p>"),
            "<p>line one\nline two</p><p>next</p>"
        );
    }

    #[test]
    fn test_wrap_paragraphs_escapes_content() {
        assert_eq!(
            wrap_paragraphs("<Hello world.>", r#"<p class="test">"#),
            r#"<p class="test">&lt;Hello world.&gt;</p>"#
        );
    }

    #[test]
    fn test_wrap_paragraphs_empty() {
        assert_eq!(wrap_paragraphs("   \n\n  ", "<p>"), "");
    }

    #[test]
    fn test_wrap_words_empty() {
        assert_eq!(wrap_words("", "<span>"), "");
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("Hello world. This is a test.", "<span>"),
            "<span>Hello</span> <span>world.</span> <span>This</span> <span>is</span> <span>a</span> <span>test.</span>"
        );
    }

    #[test]
    fn test_wrap_words_custom_attributes() {
        assert_eq!(
            wrap_words("Hello world.", r#"<span class="test">"#),
            r#"<span class="test">Hello</span> <span class="test">world.</span>"#
        );
    }

    #[test]
    fn test_wrap_words_preserves_whitespace() {
        assert_eq!(
            wrap_words("\n\nHello     world.\n\n", "<span>"),
            "\n\n<span>Hello</span>     <span>world.</span>\n\n"
        );
    }

    #[test]
    fn test_wrap_words_escapes_content() {
        assert_eq!(
            wrap_words("<Hello world.>", "<span>"),
            "<span>&lt;Hello</span> <span>world.&gt;</span>"
        );
    }
}
