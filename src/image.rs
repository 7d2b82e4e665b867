//! Uploaded image payloads and format detection.

use axum::body::Bytes;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("Uploaded image is empty")]
    Empty,

    #[error("Unsupported image format (content type: {0})")]
    UnsupportedFormat(String),
}

/// Image formats accepted by the vision model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
    Gif,
    Heic,
    Heif,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
            Self::Heic => "image/heic",
            Self::Heif => "image/heif",
        }
    }

    /// Detect the format from the leading bytes of the file.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }
        if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(Self::Webp);
        }
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }
        if data.len() >= 12 && &data[4..8] == b"ftyp" {
            return match &data[8..12] {
                b"heic" | b"heix" | b"hevc" | b"hevx" => Some(Self::Heic),
                b"mif1" | b"msf1" | b"heif" => Some(Self::Heif),
                _ => None,
            };
        }
        None
    }

    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::Webp),
            "image/gif" => Some(Self::Gif),
            "image/heic" => Some(Self::Heic),
            "image/heif" => Some(Self::Heif),
            _ => None,
        }
    }
}

/// Raw image bytes for a single request.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: Bytes,
    pub format: ImageFormat,
    pub filename: Option<String>,
}

impl ImagePayload {
    /// Build a payload, preferring the sniffed format over the declared one.
    pub fn new(
        data: Bytes,
        declared_content_type: Option<&str>,
        filename: Option<String>,
    ) -> Result<Self, ImageError> {
        if data.is_empty() {
            return Err(ImageError::Empty);
        }
        let format = ImageFormat::sniff(&data)
            .or_else(|| declared_content_type.and_then(ImageFormat::from_mime))
            .ok_or_else(|| {
                ImageError::UnsupportedFormat(
                    declared_content_type.unwrap_or("unknown").to_string(),
                )
            })?;
        Ok(Self {
            data,
            format,
            filename,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
