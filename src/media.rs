//! Media capabilities consumed by the image-set builder.
//!
//! A media resource that exists in several formats implements
//! [`MediaFormats`]; one that also has several pixel densities per format
//! implements [`MediaDensities`].

/// A resource available in one or more formats, one URL per format.
pub trait MediaFormats {
    /// MIME types for each format the resource is available in, in preference order.
    fn image_formats(&self) -> Vec<String>;

    /// The URL for one of the formats returned by [`image_formats`](Self::image_formats).
    fn url_for_format(&self, format: &str) -> String;
}

/// A resource available in several pixel densities for each format.
pub trait MediaDensities: MediaFormats {
    /// Densities and their URLs for one of the formats returned by
    /// [`image_formats`](MediaFormats::image_formats).
    fn densities_for_format(&self, format: &str) -> Vec<DensityUrl>;
}

/// A URL rendered at a given pixel density.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityUrl {
    pub density: f64,
    pub url: String,
}

impl DensityUrl {
    pub fn new(density: f64, url: impl Into<String>) -> Self {
        Self {
            density,
            url: url.into(),
        }
    }
}
