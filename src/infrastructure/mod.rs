// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping the `image` and `kamadak-exif` crates.
//!
//! # Available Adapters
//!
//! - [`image_decoder`]: Decoding, framing and JPEG data URLs (implements [`ImageDecoder`])
//! - [`exif_reader`]: EXIF tag reading (implements [`ExifReader`])
//!
//! [`ImageDecoder`]: crate::application::port::ImageDecoder
//! [`ExifReader`]: crate::application::port::ExifReader

pub mod exif_reader;
pub mod image_decoder;

pub use exif_reader::KamadakExifReader;
pub use image_decoder::ImageRsDecoder;
