// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! Everything here is plain data and pure functions so it can be unit tested
//! without a window, a decoder or an event loop.
//!
//! # Modules
//!
//! - [`geometry`]: [`Point`](geometry::Point), [`Size`](geometry::Size), [`Rect`](geometry::Rect)
//! - [`collage`]: layers, the [`LayerRegistry`](collage::LayerRegistry), drag/resize
//!   gestures, snap guides and the [`EditorSession`](collage::EditorSession)
//! - [`metadata`]: [`ExifTags`](metadata::ExifTags) and caption formatting

pub mod collage;
pub mod geometry;
pub mod metadata;
