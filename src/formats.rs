//! Image kinds the optimizer knows how to rewrite.
//!
//! Dispatch is decided from the file extension alone; file contents are
//! never sniffed to pick a codec.

use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{OptimizeError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Lossy re-encode, driven by the quality setting
    Jpeg,
    /// Lossless re-encode; quality does not apply
    Png,
    /// Markup minification, written back as text
    Svg,
}

impl ImageKind {
    /// Map a bare extension (no leading dot) to its kind, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "svg" => Some(ImageKind::Svg),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageKind::from_extension)
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageKind::Jpeg => "JPEG",
            ImageKind::Png => "PNG",
            ImageKind::Svg => "SVG",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ImageKind {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self> {
        ImageKind::from_extension(s).ok_or_else(|| OptimizeError::UnsupportedFormat(s.to_string()))
    }
}

/// Check if a file path carries one of the recognized image extensions
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}
