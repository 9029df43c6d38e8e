//! CSS value generation.
//!
//! - [`escape`](mod@escape): quoted CSS strings
//! - [`properties`]: `url()` tokens and property declarations
//! - [`image_set`]: `image-set()` values from explicit entries or media resources
//!
//! Nothing here parses or validates CSS; values are emitted as given apart
//! from string escaping.

mod builder;
pub mod escape;
pub mod image_set;
pub mod properties;

pub use builder::CssBuilder;
pub use escape::escape_string;
pub use image_set::{ImageSetSource, build_image_set};
pub use properties::{PropertyValues, build_properties, build_property, build_url};
