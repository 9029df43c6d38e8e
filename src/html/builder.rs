//! `HtmlBuilder` ties the HTML helpers together behind one configurable value.

use std::fmt;

use super::attrs::{self, AttrEntry};
use super::data_uri::{data_uri, infer_mime_type};
use super::tags::{self, PreloadKind, PreloadResource};
use super::{ids, text};
use crate::error::Result;
use crate::mime::{MagicMimeGuesser, MimeTypeGuesser};

/// Builder for HTML fragments.
///
/// The only configuration is the [`MimeTypeGuesser`] used when a data URI is
/// requested without an explicit MIME type.
///
/// # Example
///
/// ```
/// use markup_builder::html::{Attributes, HtmlBuilder};
///
/// let html = HtmlBuilder::new();
/// let attrs = html
///     .build_attrs([
///         Attributes::from([("class", "btn"), ("type", "submit")]),
///         Attributes::from([("class", "btn-primary")]),
///     ])
///     .unwrap();
/// assert_eq!(attrs, r#"class="btn btn-primary" type="submit""#);
/// ```
pub struct HtmlBuilder {
    mime_guesser: Box<dyn MimeTypeGuesser + Send + Sync>,
}

impl HtmlBuilder {
    /// Create a builder that infers MIME types from magic bytes.
    pub fn new() -> Self {
        Self::with_mime_guesser(MagicMimeGuesser)
    }

    /// Create a builder with a custom MIME type guesser.
    pub fn with_mime_guesser(guesser: impl MimeTypeGuesser + Send + Sync + 'static) -> Self {
        Self {
            mime_guesser: Box::new(guesser),
        }
    }

    /// See [`attrs::build_attrs`].
    pub fn build_attrs<I>(&self, sets: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = AttrEntry>,
    {
        attrs::build_attrs(sets)
    }

    /// See [`attrs::build_classes`].
    pub fn build_classes<I, S>(&self, classes: I) -> String
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        attrs::build_classes(classes)
    }

    /// See [`attrs::add_classes`].
    pub fn add_classes<I, S>(&self, class_list: &str, additional: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        attrs::add_classes(class_list, additional)
    }

    /// See [`tags::build_stylesheet`].
    pub fn build_stylesheet(
        &self,
        url: &str,
        media: Option<&str>,
        integrity: Option<&str>,
        crossorigin: Option<&str>,
    ) -> Result<String> {
        tags::build_stylesheet(url, media, integrity, crossorigin)
    }

    /// See [`tags::build_script`].
    pub fn build_script(
        &self,
        url: &str,
        script_type: Option<&str>,
        is_async: bool,
        integrity: Option<&str>,
        crossorigin: Option<&str>,
    ) -> Result<String> {
        tags::build_script(url, script_type, is_async, integrity, crossorigin)
    }

    /// See [`tags::build_preload_links`].
    pub fn build_preload_links<R>(
        &self,
        preloads: &[(PreloadKind, Vec<R>)],
        preconnect_hosts: &[&str],
    ) -> Result<String>
    where
        R: Clone + Into<PreloadResource>,
    {
        tags::build_preload_links(preloads, preconnect_hosts)
    }

    /// See [`tags::build_src_set`].
    pub fn build_src_set<I, U, S>(&self, entries: I) -> String
    where
        I: IntoIterator<Item = (U, S)>,
        U: AsRef<str>,
        S: AsRef<str>,
    {
        tags::build_src_set(entries)
    }

    /// See [`text::wrap_paragraphs`].
    pub fn wrap_paragraphs(&self, text: &str, wrapping_tag: &str) -> String {
        text::wrap_paragraphs(text, wrapping_tag)
    }

    /// See [`text::wrap_words`].
    pub fn wrap_words(&self, text: &str, wrapping_tag: &str) -> String {
        text::wrap_words(text, wrapping_tag)
    }

    /// Build a `data:` URI, inferring the MIME type when none is given.
    ///
    /// Inference writes `data` to a temporary file for the configured guesser
    /// and fails with [`Error::MimeInference`](crate::Error::MimeInference)
    /// when the guesser has no answer.
    pub fn generate_data_uri(
        &self,
        data: &[u8],
        mime: Option<&str>,
        parameters: &[(&str, &str)],
    ) -> Result<String> {
        let mime = match mime {
            Some(mime) => mime.to_string(),
            None => infer_mime_type(data, self.mime_guesser.as_ref())?,
        };
        Ok(data_uri(data, &mime, parameters))
    }

    /// See [`ids::map_html_ids`].
    pub fn map_html_ids<F>(
        &self,
        html: &str,
        transformer: F,
        additional_attributes: &[&str],
    ) -> Result<String>
    where
        F: FnMut(&str, &str) -> String,
    {
        ids::map_html_ids(html, transformer, additional_attributes)
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HtmlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlBuilder").finish_non_exhaustive()
    }
}
