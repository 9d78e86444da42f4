// SPDX-License-Identifier: MPL-2.0
//! Image ingestion: decode, frame, place, then caption from EXIF.
//!
//! The pipeline runs in two asynchronous stages with explicit hand-off:
//!
//! 1. [`prepare_image`] decodes the file and builds the framed bitmap.
//!    The caller stores the pixels and calls [`place_image`] on the session.
//! 2. [`extract_tags`] reads EXIF from the original bytes; the caller then
//!    calls [`attach_caption`] to add the caption layer below the image.
//!
//! Both stage functions are synchronous and side-effect free apart from
//! logging, so the UI can run them inside `Task::perform` and tests can call
//! them directly with fake ports.

use crate::application::port::{DecodeError, DecodedImage, ExifReader, ImageDecoder};
use crate::domain::collage::placement::{self, placement_bounds};
use crate::domain::collage::{EditorSession, ImageKey, LayerDraft, LayerId};
use crate::domain::geometry::Size;
use crate::domain::metadata::{format_caption, CaptionLabels, ExifTags};
use std::sync::Arc;

/// Knobs for the ingest pipeline, usually taken from `[ingest]` in the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngestOptions {
    /// Draw the image on a white frame before placing it.
    pub frame_enabled: bool,
    /// Frame size relative to the image.
    pub frame_ratio: f64,
    /// Share of the container the image occupies.
    pub placement_scale: f32,
    /// Add a caption layer built from EXIF tags.
    pub exif_caption: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            frame_enabled: true,
            frame_ratio: placement_bounds::DEFAULT_FRAME_RATIO,
            placement_scale: placement_bounds::DEFAULT_SCALE,
            exif_caption: true,
        }
    }
}

/// Output of the decode stage.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    /// What gets displayed: the framed bitmap, or the decoded one when
    /// framing is off.
    pub display: DecodedImage,
    /// JPEG data URL of `display`, if encoding succeeded.
    pub data_url: Option<String>,
    /// The untouched file bytes, kept for the EXIF stage.
    pub source: Arc<Vec<u8>>,
}

impl PreparedImage {
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.display.width() as f32, self.display.height() as f32)
    }
}

/// Decode stage.
///
/// # Errors
///
/// Returns the decoder's error if the bytes cannot be decoded or framed.
/// A failed data-URL encode only drops the export and is logged.
pub fn prepare_image(
    decoder: &dyn ImageDecoder,
    bytes: Vec<u8>,
    options: &IngestOptions,
) -> Result<PreparedImage, DecodeError> {
    let decoded = decoder.decode(&bytes)?;
    tracing::debug!(width = decoded.width(), height = decoded.height(), "image decoded");

    let display = if options.frame_enabled {
        decoder.frame(&decoded, options.frame_ratio)?
    } else {
        decoded
    };

    let data_url = match decoder.to_data_url(&display) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(%err, "could not encode data URL");
            None
        }
    };

    Ok(PreparedImage {
        display,
        data_url,
        source: Arc::new(bytes),
    })
}

/// Adds the image layer, fitted and centered in the session's container.
///
/// Returns `None` when the image or the container is empty.
pub fn place_image(
    session: &mut EditorSession,
    key: ImageKey,
    image_size: Size,
    options: &IngestOptions,
) -> Option<LayerId> {
    let container = session.container().size;
    let rect = placement::fit_in_container(image_size, container, options.placement_scale)?;
    let id = session.add_layer(LayerDraft::image(key, rect));
    tracing::info!(layer = id.value(), ?rect, "image layer placed");
    Some(id)
}

/// EXIF stage. Never fails: missing or unreadable EXIF yields empty tags.
#[must_use]
pub fn extract_tags(reader: &dyn ExifReader, bytes: &[u8]) -> ExifTags {
    match reader.read_tags(bytes) {
        Ok(tags) => tags,
        Err(err) => {
            tracing::debug!(%err, "no EXIF caption data");
            ExifTags::default()
        }
    }
}

/// Adds the caption text layer directly below `image_layer`.
///
/// An empty caption still produces an (empty) text layer. Returns `None` if
/// captions are disabled or the image layer is unknown.
pub fn attach_caption(
    session: &mut EditorSession,
    image_layer: LayerId,
    tags: &ExifTags,
    labels: &CaptionLabels,
    options: &IngestOptions,
) -> Option<LayerId> {
    if !options.exif_caption {
        return None;
    }
    let image_rect = session.registry().layer(image_layer)?.rect();
    let text = format_caption(tags, labels);
    let id = session.add_text(text, placement::caption_origin(image_rect));
    tracing::debug!(layer = id.value(), "caption layer added");
    Some(id)
}
