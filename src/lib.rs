//! # markup-builder
//!
//! Small, safe builders for HTML and CSS fragments.
//!
//! ## Features
//!
//! - Merge and format HTML attribute sets with class concatenation
//! - Escape text for HTML, JSON and inline JavaScript
//! - Build stylesheet, script, preload and `srcset` markup
//! - Generate `data:` URIs with optional MIME type inference
//! - Build CSS properties, `url()` tokens and `image-set()` values
//!
//! ## Quick Start
//!
//! ```
//! use markup_builder::{Attributes, CssBuilder, HtmlBuilder};
//!
//! let html = HtmlBuilder::new();
//! let attrs = html
//!     .build_attrs([Attributes::new().with("id", "main").with("hidden", true)])
//!     .unwrap();
//! assert_eq!(attrs, r#"id="main" hidden"#);
//!
//! let css = CssBuilder::new();
//! assert_eq!(css.build_url("it's.png"), r"url('it\'s.png')");
//! ```
//!
//! ## Image sets
//!
//! `image-set()` values can be built from a list of entries or from any type
//! implementing [`MediaFormats`] or [`MediaDensities`]:
//!
//! ```
//! use markup_builder::{DensityUrl, ImageSetSource, MediaDensities, MediaFormats, build_image_set};
//!
//! struct Photo;
//!
//! impl MediaFormats for Photo {
//!     fn image_formats(&self) -> Vec<String> {
//!         vec!["image/jpeg".to_string()]
//!     }
//!     fn url_for_format(&self, _format: &str) -> String {
//!         "photo.jpg".to_string()
//!     }
//! }
//!
//! impl MediaDensities for Photo {
//!     fn densities_for_format(&self, _format: &str) -> Vec<DensityUrl> {
//!         vec![DensityUrl::new(1.0, "photo.jpg"), DensityUrl::new(2.0, "photo@2x.jpg")]
//!     }
//! }
//!
//! let value = build_image_set(ImageSetSource::Densities(&Photo), None).unwrap();
//! assert_eq!(value, "image-set(url('photo.jpg') 1x, url('photo@2x.jpg') 2x)");
//! ```

pub mod css;
pub mod error;
pub mod html;
pub mod media;
pub mod mime;

pub use css::{CssBuilder, ImageSetSource, build_image_set};
pub use error::{Error, Result};
pub use html::{AttrValue, Attributes, HtmlBuilder};
pub use media::{DensityUrl, MediaDensities, MediaFormats};
pub use mime::{MagicMimeGuesser, MimeTypeGuesser};
