//! Resource-loading tags: stylesheets, scripts, preloads and `srcset` values.

use std::fmt;
use std::str::FromStr;

use super::attrs::{Attributes, build_attrs};
use super::escape::escape;
use crate::error::{Error, Result};

/// Resource kinds accepted by `<link rel="preload" as="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreloadKind {
    Audio,
    Document,
    Embed,
    Fetch,
    Font,
    Image,
    Object,
    Script,
    Style,
    Track,
    Video,
    Worker,
}

impl PreloadKind {
    pub const ALL: [PreloadKind; 12] = [
        PreloadKind::Audio,
        PreloadKind::Document,
        PreloadKind::Embed,
        PreloadKind::Fetch,
        PreloadKind::Font,
        PreloadKind::Image,
        PreloadKind::Object,
        PreloadKind::Script,
        PreloadKind::Style,
        PreloadKind::Track,
        PreloadKind::Video,
        PreloadKind::Worker,
    ];

    /// The value used in the `as` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            PreloadKind::Audio => "audio",
            PreloadKind::Document => "document",
            PreloadKind::Embed => "embed",
            PreloadKind::Fetch => "fetch",
            PreloadKind::Font => "font",
            PreloadKind::Image => "image",
            PreloadKind::Object => "object",
            PreloadKind::Script => "script",
            PreloadKind::Style => "style",
            PreloadKind::Track => "track",
            PreloadKind::Video => "video",
            PreloadKind::Worker => "worker",
        }
    }
}

impl fmt::Display for PreloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreloadKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                log::debug!("rejecting preload type {s:?}");
                Error::InvalidPreloadType(s.to_string())
            })
    }
}

/// A resource to preload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadResource {
    pub url: String,
    pub integrity: Option<String>,
    pub crossorigin: Option<String>,
}

impl PreloadResource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_integrity(mut self, integrity: impl Into<String>) -> Self {
        self.integrity = Some(integrity.into());
        self
    }

    pub fn with_crossorigin(mut self, crossorigin: impl Into<String>) -> Self {
        self.crossorigin = Some(crossorigin.into());
        self
    }
}

impl From<&str> for PreloadResource {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for PreloadResource {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

/// `<link rel="stylesheet">` for the given URL.
pub fn build_stylesheet(
    url: &str,
    media: Option<&str>,
    integrity: Option<&str>,
    crossorigin: Option<&str>,
) -> Result<String> {
    let attrs = Attributes::new()
        .with("rel", "stylesheet")
        .with("href", url)
        .with("media", media)
        .with("integrity", integrity)
        .with("crossorigin", crossorigin);
    Ok(format!("<link {}/>", build_attrs([attrs])?))
}

/// `<script src>` for the given URL.
pub fn build_script(
    url: &str,
    script_type: Option<&str>,
    is_async: bool,
    integrity: Option<&str>,
    crossorigin: Option<&str>,
) -> Result<String> {
    let attrs = Attributes::new()
        .with("src", url)
        .with("type", script_type)
        .with("async", is_async)
        .with("integrity", integrity)
        .with("crossorigin", crossorigin);
    Ok(format!("<script {}></script>", build_attrs([attrs])?))
}

/// Preload and preconnect `<link>` tags.
///
/// One `rel="preload"` link is emitted per resource, in the given order,
/// followed by one `rel="preconnect"` link per host.
pub fn build_preload_links<R>(
    preloads: &[(PreloadKind, Vec<R>)],
    preconnect_hosts: &[&str],
) -> Result<String>
where
    R: Clone + Into<PreloadResource>,
{
    let mut html = String::new();

    for (kind, resources) in preloads {
        for resource in resources {
            let resource: PreloadResource = resource.clone().into();
            let attrs = Attributes::new()
                .with("rel", "preload")
                .with("href", resource.url)
                .with("as", kind.as_str())
                .with("integrity", resource.integrity)
                .with("crossorigin", resource.crossorigin);
            html.push_str(&format!("<link {}/>", build_attrs([attrs])?));
        }
    }

    for host in preconnect_hosts {
        let attrs = Attributes::new().with("rel", "preconnect").with("href", *host);
        html.push_str(&format!("<link {}/>", build_attrs([attrs])?));
    }

    Ok(html)
}

/// An HTML-safe `srcset` value from URLs and their size descriptors.
///
/// # Examples
///
/// ```
/// use markup_builder::html::build_src_set;
///
/// assert_eq!(
///     build_src_set([("large.jpg", "500w"), ("small.jpg", "200w")]),
///     "large.jpg 500w, small.jpg 200w",
/// );
/// ```
pub fn build_src_set<I, U, S>(entries: I) -> String
where
    I: IntoIterator<Item = (U, S)>,
    U: AsRef<str>,
    S: AsRef<str>,
{
    let formatted: Vec<String> = entries
        .into_iter()
        .map(|(url, size)| format!("{} {}", url.as_ref(), size.as_ref()))
        .collect();
    escape(&formatted.join(", "))
}
