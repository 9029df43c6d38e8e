//! `CssBuilder` groups the CSS helpers behind a single value.

use super::image_set::{ImageSetSource, build_image_set};
use super::properties::{self, PropertyValues};
use crate::error::Result;

/// Builder for CSS values and declarations.
///
/// Stateless; it exists so callers can hold the CSS helpers the same way they
/// hold an [`HtmlBuilder`](crate::html::HtmlBuilder).
///
/// # Example
///
/// ```
/// use markup_builder::css::CssBuilder;
///
/// let css = CssBuilder::new();
/// assert_eq!(css.build_url("bg.png"), "url('bg.png')");
/// assert_eq!(css.build_property("height", ["100%", "100vh"]), "height:100%;height:100vh");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CssBuilder;

impl CssBuilder {
    pub fn new() -> Self {
        Self
    }

    /// See [`properties::build_url`].
    pub fn build_url(&self, url: &str) -> String {
        properties::build_url(url)
    }

    /// See [`properties::build_property`].
    pub fn build_property(&self, name: &str, values: impl Into<PropertyValues>) -> String {
        properties::build_property(name, values)
    }

    /// See [`properties::build_properties`].
    pub fn build_properties<I, K, V>(&self, properties: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyValues>,
    {
        properties::build_properties(properties)
    }

    /// See [`build_image_set`].
    pub fn build_image_set(&self, source: ImageSetSource<'_>, format: Option<&str>) -> Result<String> {
        build_image_set(source, format)
    }
}
