//! MIME type inference for data URIs.
//!
//! Inference is delegated to a [`MimeTypeGuesser`], which inspects a file on
//! disk. The default [`MagicMimeGuesser`] looks at magic bytes only; callers
//! with access to a richer database can plug in their own implementation.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected by [`MagicMimeGuesser`].
const SNIFF_LEN: u64 = 512;

/// Something that can guess the MIME type of a file.
pub trait MimeTypeGuesser {
    /// Guess the MIME type of the file at `path`, or `None` if unknown.
    fn guess_mime_type(&self, path: &Path) -> io::Result<Option<String>>;
}

impl<F> MimeTypeGuesser for F
where
    F: Fn(&Path) -> io::Result<Option<String>>,
{
    fn guess_mime_type(&self, path: &Path) -> io::Result<Option<String>> {
        self(path)
    }
}

/// Guesses MIME types from the leading bytes of a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicMimeGuesser;

impl MimeTypeGuesser for MagicMimeGuesser {
    fn guess_mime_type(&self, path: &Path) -> io::Result<Option<String>> {
        let mut head = Vec::with_capacity(SNIFF_LEN as usize);
        File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;

        let format = detect_media_format(&head);
        log::trace!("sniffed {} as {:?}", path.display(), format);
        Ok(format.mime_type().map(str::to_string))
    }
}

/// Formats recognised from magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
    Avif,
    Bmp,
    Ico,
    Svg,
    Pdf,
    Woff,
    Woff2,
    /// UTF-8 text without control characters
    Text,
    /// Unknown/binary format
    Unknown,
}

impl MediaFormat {
    /// Get the MIME type string for this format.
    pub fn mime_type(self) -> Option<&'static str> {
        Some(match self {
            MediaFormat::Jpeg => "image/jpeg",
            MediaFormat::Png => "image/png",
            MediaFormat::Gif => "image/gif",
            MediaFormat::WebP => "image/webp",
            MediaFormat::Avif => "image/avif",
            MediaFormat::Bmp => "image/bmp",
            MediaFormat::Ico => "image/vnd.microsoft.icon",
            MediaFormat::Svg => "image/svg+xml",
            MediaFormat::Pdf => "application/pdf",
            MediaFormat::Woff => "font/woff",
            MediaFormat::Woff2 => "font/woff2",
            MediaFormat::Text => "text/plain",
            MediaFormat::Unknown => return None,
        })
    }

}

/// Detect a format from the leading bytes of some data.
pub fn detect_media_format(data: &[u8]) -> MediaFormat {
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return MediaFormat::Jpeg;
    }
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return MediaFormat::Png;
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return MediaFormat::Gif;
    }
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return MediaFormat::WebP;
    }
    if data.len() >= 12 && &data[4..8] == b"ftyp" && matches!(&data[8..12], b"avif" | b"avis") {
        return MediaFormat::Avif;
    }
    if data.starts_with(b"BM") && data.len() >= 14 {
        return MediaFormat::Bmp;
    }
    if data.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        return MediaFormat::Ico;
    }
    if data.starts_with(b"%PDF-") {
        return MediaFormat::Pdf;
    }
    if data.starts_with(b"wOFF") {
        return MediaFormat::Woff;
    }
    if data.starts_with(b"wOF2") {
        return MediaFormat::Woff2;
    }

    // The sniff window may cut a multi-byte character in half.
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(e) if e.error_len().is_none() => {
            // Only the trailing sequence is incomplete
            std::str::from_utf8(&data[..e.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return MediaFormat::Unknown,
    };

    if text.is_empty() || text.chars().any(|c| c.is_control() && !c.is_whitespace()) {
        return MediaFormat::Unknown;
    }

    let trimmed = text.trim_start_matches('\u{FEFF}').trim_start();
    if trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && trimmed.contains("<svg")) {
        return MediaFormat::Svg;
    }

    MediaFormat::Text
}
