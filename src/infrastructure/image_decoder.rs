// SPDX-License-Identifier: MPL-2.0
//! `image` crate adapter implementing the [`ImageDecoder`] port.
//!
//! [`ImageDecoder`]: crate::application::port::ImageDecoder

use crate::application::port::{DecodeError, DecodedImage, ImageDecoder};
use crate::domain::collage::placement::framed_size;
use base64::Engine as _;
use image_rs::{imageops, DynamicImage, ImageError, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

const FRAME_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// File extensions offered by the open dialog; matches the enabled `image` codecs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// Whether `path` has an extension the decoder is built for.
#[must_use]
pub fn is_supported_path(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Decodes with `image`, frames with `imageops` and exports JPEG data URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRsDecoder;

impl ImageRsDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for ImageRsDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        let image = image_rs::load_from_memory(bytes).map_err(map_image_error)?;
        into_decoded(image.to_rgba8())
    }

    fn frame(&self, image: &DecodedImage, ratio: f64) -> Result<DecodedImage, DecodeError> {
        let source = to_rgba_image(image)?;
        let (width, height) = framed_size(image.width(), image.height(), ratio);
        let mut canvas = RgbaImage::from_pixel(width, height, FRAME_COLOR);

        let x = i64::from(width.saturating_sub(image.width()) / 2);
        let y = i64::from(height.saturating_sub(image.height()) / 2);
        imageops::overlay(&mut canvas, &source, x, y);

        into_decoded(canvas)
    }

    fn to_data_url(&self, image: &DecodedImage) -> Result<String, DecodeError> {
        // JPEG has no alpha channel.
        let rgb = DynamicImage::ImageRgba8(to_rgba_image(image)?).to_rgb8();
        let mut encoded = Cursor::new(Vec::new());
        rgb.write_to(&mut encoded, ImageFormat::Jpeg)
            .map_err(|err| DecodeError::EncodeFailed(err.to_string()))?;

        let payload = base64::engine::general_purpose::STANDARD.encode(encoded.into_inner());
        Ok(format!("{DATA_URL_PREFIX}{payload}"))
    }
}

fn to_rgba_image(image: &DecodedImage) -> Result<RgbaImage, DecodeError> {
    RgbaImage::from_raw(image.width(), image.height(), image.rgba().to_vec())
        .ok_or_else(|| DecodeError::CorruptedData("pixel buffer does not match dimensions".to_string()))
}

fn into_decoded(image: RgbaImage) -> Result<DecodedImage, DecodeError> {
    let (width, height) = image.dimensions();
    DecodedImage::new(width, height, image.into_raw())
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        other => DecodeError::CorruptedData(other.to_string()),
    }
}
