// SPDX-License-Identifier: MPL-2.0
//! Image decoding port definition.
//!
//! The [`ImageDecoder`] trait turns encoded bytes into RGBA pixels, draws the
//! white presentation frame and encodes the export data URL. The production
//! adapter lives in [`crate::infrastructure::image_decoder`].

use std::fmt;
use std::sync::Arc;

// =============================================================================
// DecodeError
// =============================================================================

/// Errors that can occur while decoding or re-encoding an image.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The bytes are not in a format the decoder understands.
    UnsupportedFormat,

    /// The image decoded to a zero-sized bitmap.
    InvalidDimensions {
        /// The width that was detected.
        width: u32,
        /// The height that was detected.
        height: u32,
    },

    /// The data is corrupted or truncated.
    CorruptedData(String),

    /// Re-encoding (e.g. to JPEG) failed.
    EncodeFailed(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedFormat => write!(f, "Unsupported image format"),
            DecodeError::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {width}x{height}")
            }
            DecodeError::CorruptedData(msg) => write!(f, "Corrupted image data: {msg}"),
            DecodeError::EncodeFailed(msg) => write!(f, "Failed to encode image: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

// =============================================================================
// DecodedImage
// =============================================================================

/// A decoded bitmap in RGBA8 layout.
///
/// Pixels are shared behind an `Arc` so the image can travel through messages
/// without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    rgba: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Wraps RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidDimensions`] if a dimension is zero, or
    /// [`DecodeError::CorruptedData`] if the buffer length does not match.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(DecodeError::CorruptedData(format!(
                "expected {expected} bytes of RGBA, got {}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba: Arc::new(rgba),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

// =============================================================================
// ImageDecoder Trait
// =============================================================================

/// Port for decoding and re-encoding images.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; decoding runs on a background task.
pub trait ImageDecoder: Send + Sync {
    /// Decodes encoded bytes (JPEG, PNG, ...) into RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes cannot be decoded.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError>;

    /// Draws `image` centered on a white canvas `ratio` times its size.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the framed bitmap cannot be built.
    fn frame(&self, image: &DecodedImage, ratio: f64) -> Result<DecodedImage, DecodeError>;

    /// Encodes `image` as a `data:image/jpeg;base64,...` URL.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::EncodeFailed`] if JPEG encoding fails.
    fn to_data_url(&self, image: &DecodedImage) -> Result<String, DecodeError>;
}
