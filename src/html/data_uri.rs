//! `data:` URI generation.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode, utf8_percent_encode};

use crate::error::{Error, Result};
use crate::mime::MimeTypeGuesser;

/// Characters left alone by RFC 3986 percent-encoding (unreserved set).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build a `data:` URI for `data` with a known MIME type.
///
/// Parameters are appended as `;key=value` with percent-encoded values.
/// `text/*` payloads are percent-encoded, everything else is base64-encoded.
///
/// # Examples
///
/// ```
/// use markup_builder::html::data_uri;
///
/// assert_eq!(data_uri(b"Hello world.", "text/plain", &[]), "data:text/plain,Hello%20world.");
/// assert_eq!(
///     data_uri(b"\x89PNG", "image/png", &[("name", "a b")]),
///     "data:image/png;name=a%20b;base64,iVBORw==",
/// );
/// ```
pub fn data_uri(data: &[u8], mime: &str, parameters: &[(&str, &str)]) -> String {
    let mut uri = format!("data:{mime}");
    for (key, value) in parameters {
        uri.push(';');
        uri.push_str(key);
        uri.push('=');
        uri.extend(utf8_percent_encode(value, URI_COMPONENT));
    }

    if mime.starts_with("text/") {
        uri.push(',');
        uri.extend(percent_encode(data, URI_COMPONENT));
    } else {
        uri.push_str(";base64,");
        uri.push_str(&BASE64_STANDARD.encode(data));
    }
    uri
}

/// Infer the MIME type of `data` by handing a temporary copy to `guesser`.
///
/// The temporary file is removed before returning.
pub fn infer_mime_type(data: &[u8], guesser: &dyn MimeTypeGuesser) -> Result<String> {
    let mut file = tempfile::Builder::new().prefix("mime").tempfile()?;
    file.write_all(data)?;
    file.flush()?;

    let guessed = guesser.guess_mime_type(file.path())?;
    file.close()?;

    guessed.ok_or_else(|| {
        log::debug!("no MIME type could be inferred for {} bytes", data.len());
        Error::MimeInference
    })
}
