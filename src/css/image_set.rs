//! CSS `image-set()` values.
//!
//! An image set can be built from three kinds of source:
//!
//! - explicit `(url, descriptor)` pairs,
//! - a [`MediaFormats`] resource (one URL per format),
//! - a [`MediaDensities`] resource (several densities per format).
//!
//! Entries are emitted in the order the source yields them; nothing is
//! sorted or deduplicated.

use std::borrow::Cow;
use std::fmt;

use super::escape::escape_string;
use crate::error::{Error, Result};
use crate::media::{MediaDensities, MediaFormats};

/// The input to [`build_image_set`].
pub enum ImageSetSource<'a> {
    /// URLs mapped to `srcset`-style descriptors such as `2x` or `500w`.
    Entries(Vec<(Cow<'a, str>, Cow<'a, str>)>),
    /// One URL per format.
    Formats(&'a dyn MediaFormats),
    /// Several density/URL pairs per format.
    Densities(&'a dyn MediaDensities),
}

impl<'a> ImageSetSource<'a> {
    /// Build an [`ImageSetSource::Entries`] from URL/descriptor pairs.
    pub fn entries<I, U, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (U, D)>,
        U: Into<Cow<'a, str>>,
        D: Into<Cow<'a, str>>,
    {
        ImageSetSource::Entries(
            entries
                .into_iter()
                .map(|(url, descriptor)| (url.into(), descriptor.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for ImageSetSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSetSource::Entries(entries) => f.debug_tuple("Entries").field(entries).finish(),
            ImageSetSource::Formats(_) => f.write_str("Formats(..)"),
            ImageSetSource::Densities(_) => f.write_str("Densities(..)"),
        }
    }
}

/// One candidate of an `image-set()` value.
#[derive(Debug, Clone, PartialEq)]
struct ImageSetEntry<'a> {
    url: Cow<'a, str>,
    resolution: Option<Cow<'a, str>>,
    format: Option<Cow<'a, str>>,
}

impl fmt::Display for ImageSetEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "url({})", escape_string(&self.url))?;
        if let Some(format) = &self.format {
            write!(f, " type({})", escape_string(format))?;
        }
        if let Some(resolution) = &self.resolution {
            write!(f, " {resolution}")?;
        }
        Ok(())
    }
}

/// Build an `image-set()` value.
///
/// `format` selects a single format of a [`ImageSetSource::Densities`] source;
/// it is rejected with [`Error::InvalidCall`] for the other sources. A
/// densities source only includes `type()` tokens when more than one format
/// is rendered. Fails with [`Error::EmptyInput`] if no entries are produced.
///
/// # Examples
///
/// ```
/// use markup_builder::css::{ImageSetSource, build_image_set};
///
/// let source = ImageSetSource::entries([("image@2x.jpg", "2x"), ("image.jpg", "1x")]);
/// assert_eq!(
///     build_image_set(source, None).unwrap(),
///     "image-set(url('image@2x.jpg') 2x, url('image.jpg') 1x)",
/// );
/// ```
pub fn build_image_set(source: ImageSetSource<'_>, format: Option<&str>) -> Result<String> {
    let entries = match source {
        ImageSetSource::Densities(media) => density_entries(media, format),
        ImageSetSource::Formats(media) => {
            reject_format(format, "an image format cannot be specified with a formats source")?;
            format_entries(media)
        }
        ImageSetSource::Entries(pairs) => {
            reject_format(format, "an image format cannot be specified with an entries list")?;
            pairs
                .into_iter()
                .map(|(url, descriptor)| ImageSetEntry {
                    url,
                    resolution: Some(descriptor),
                    format: None,
                })
                .collect()
        }
    };

    if entries.is_empty() {
        log::debug!("rejecting empty image-set");
        return Err(Error::EmptyInput);
    }

    let formatted: Vec<String> = entries.iter().map(ToString::to_string).collect();
    Ok(format!("image-set({})", formatted.join(", ")))
}

fn reject_format(format: Option<&str>, reason: &'static str) -> Result<()> {
    match format {
        Some(format) => {
            log::debug!("rejecting image-set format {format:?}: {reason}");
            Err(Error::InvalidCall(reason))
        }
        None => Ok(()),
    }
}

fn density_entries(
    media: &dyn MediaDensities,
    selected: Option<&str>,
) -> Vec<ImageSetEntry<'static>> {
    let formats = match selected {
        Some(format) => vec![format.to_string()],
        None => media.image_formats(),
    };
    let with_formats = formats.len() > 1;

    let mut entries = Vec::new();
    for format in &formats {
        for density in media.densities_for_format(format) {
            entries.push(ImageSetEntry {
                url: Cow::Owned(density.url),
                resolution: Some(Cow::Owned(format!("{}x", density.density))),
                format: with_formats.then(|| Cow::Owned(format.clone())),
            });
        }
    }
    entries
}

fn format_entries(media: &dyn MediaFormats) -> Vec<ImageSetEntry<'static>> {
    media
        .image_formats()
        .into_iter()
        .map(|format| ImageSetEntry {
            url: Cow::Owned(media.url_for_format(&format)),
            resolution: None,
            format: Some(Cow::Owned(format)),
        })
        .collect()
}
