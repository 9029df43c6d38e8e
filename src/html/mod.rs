//! HTML fragment generation.
//!
//! - [`attrs`]: attribute merging and formatting, class lists
//! - [`escape`](mod@escape): HTML, JSON and inline-JS escaping
//! - [`tags`]: stylesheet, script and preload tags, `srcset` values
//! - [`text`]: paragraph and word wrapping
//! - [`ids`]: best-effort rewriting of ID attributes
//! - [`data_uri`](mod@data_uri): `data:` URIs
//!
//! [`HtmlBuilder`] exposes all of these through one value that also carries
//! the MIME type guesser used by data URI generation.

pub mod attrs;
mod builder;
pub mod data_uri;
pub mod escape;
pub mod ids;
mod patterns;
pub mod tags;
pub mod text;

pub use attrs::{
    AttrEntry, AttrValue, Attributes, add_classes, build_attrs, build_classes, is_valid_attr_name,
    merge_attrs,
};
pub use builder::HtmlBuilder;
pub use data_uri::{data_uri, infer_mime_type};
pub use escape::{JsonOptions, escape, escape_js_value, escape_json, unescape};
pub use ids::map_html_ids;
pub use tags::{
    PreloadKind, PreloadResource, build_preload_links, build_script, build_src_set,
    build_stylesheet,
};
pub use text::{wrap_paragraphs, wrap_words};
