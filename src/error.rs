//! Error types for markup-builder operations.

use thiserror::Error;

/// Errors that can occur while building markup fragments.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid attribute name: {0}")]
    InvalidAttributeName(String),

    #[error("Invalid call: {0}")]
    InvalidCall(&'static str),

    #[error("At least one image-set entry must be provided")]
    EmptyInput,

    #[error("Invalid preload type \"{0}\"")]
    InvalidPreloadType(String),

    #[error("Failed inferring MIME type")]
    MimeInference,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex_lite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
