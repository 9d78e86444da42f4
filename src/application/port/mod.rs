// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the ingest pipeline only
//! sees the traits, so tests can substitute fakes.
//!
//! # Available Ports
//!
//! - [`media`]: Image decoding, framing and data-URL export
//! - [`metadata`]: EXIF tag reading
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared with background tasks
//! - Methods return `Result` with port-specific error types
//! - No `async fn` - callers wrap calls in Iced `Task`s

pub mod media;
pub mod metadata;

pub use media::{DecodeError, DecodedImage, ImageDecoder};
pub use metadata::{ExifReader, MetadataError};
