// SPDX-License-Identifier: MPL-2.0
//! EXIF reading port definition.
//!
//! Infrastructure adapters implement [`ExifReader`] using `kamadak-exif`.

use crate::domain::metadata::ExifTags;
use std::fmt;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur while reading EXIF data.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// The image carries no EXIF block.
    NotFound,

    /// The container format has no place for EXIF data.
    UnsupportedFormat,

    /// The EXIF block is present but malformed.
    CorruptedMetadata(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::NotFound => write!(f, "No EXIF data found"),
            MetadataError::UnsupportedFormat => write!(f, "Format does not support metadata"),
            MetadataError::CorruptedMetadata(msg) => write!(f, "Corrupted metadata: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}

// =============================================================================
// ExifReader Trait
// =============================================================================

/// Port for reading caption tags from encoded image bytes.
///
/// Readers work on the original file bytes, never on a re-encoded frame,
/// since re-encoding drops the EXIF block.
pub trait ExifReader: Send + Sync {
    /// Reads the caption-relevant EXIF tags.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the data is missing or unreadable.
    fn read_tags(&self, bytes: &[u8]) -> Result<ExifTags, MetadataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_error_display() {
        assert!(format!("{}", MetadataError::NotFound).contains("No EXIF"));
        assert!(format!("{}", MetadataError::CorruptedMetadata("bad ifd".into())).contains("bad ifd"));
        assert!(format!("{}", MetadataError::UnsupportedFormat).contains("does not support"));
    }
}
