// SPDX-License-Identifier: MPL-2.0
//! `kamadak-exif` adapter implementing the [`ExifReader`] port.
//!
//! [`ExifReader`]: crate::application::port::ExifReader

use crate::application::port::{ExifReader, MetadataError};
use crate::domain::metadata::ExifTags;
use std::io::Cursor;

/// Reads caption tags from JPEG, TIFF, PNG, HEIF and WebP containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct KamadakExifReader;

impl KamadakExifReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExifReader for KamadakExifReader {
    fn read_tags(&self, bytes: &[u8]) -> Result<ExifTags, MetadataError> {
        let exif = exif::Reader::new()
            .read_from_container(&mut Cursor::new(bytes))
            .map_err(map_exif_error)?;

        Ok(ExifTags {
            make: ascii_field(&exif, exif::Tag::Make),
            model: ascii_field(&exif, exif::Tag::Model),
            focal_length: rational_field(&exif, exif::Tag::FocalLength),
            f_number: rational_field(&exif, exif::Tag::FNumber),
            iso: exif
                .get_field(exif::Tag::PhotographicSensitivity, exif::In::PRIMARY)
                .and_then(|field| field.value.get_uint(0)),
            exposure_time: rational_field(&exif, exif::Tag::ExposureTime),
        })
    }
}

fn ascii_field(exif: &exif::Exif, tag: exif::Tag) -> Option<String> {
    let field = exif.get_field(tag, exif::In::PRIMARY)?;
    let value = field.display_value().to_string();
    let value = value.trim_matches('"').trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn rational_field(exif: &exif::Exif, tag: exif::Tag) -> Option<f64> {
    let field = exif.get_field(tag, exif::In::PRIMARY)?;
    match &field.value {
        exif::Value::Rational(values) => values.first().map(exif::Rational::to_f64),
        exif::Value::SRational(values) => values.first().map(exif::SRational::to_f64),
        other => other.get_uint(0).map(f64::from),
    }
}

fn map_exif_error(err: exif::Error) -> MetadataError {
    match err {
        exif::Error::NotFound(_) => MetadataError::NotFound,
        exif::Error::NotSupported(_) => MetadataError::UnsupportedFormat,
        other => MetadataError::CorruptedMetadata(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exif::experimental::Writer;
    use exif::{Field, In, Rational, Tag, Value};

    fn tiff_with(fields: &[Field]) -> Vec<u8> {
        let mut writer = Writer::new();
        for field in fields {
            writer.push_field(field);
        }
        let mut bytes = Cursor::new(Vec::new());
        writer.write(&mut bytes, false).expect("write exif");
        bytes.into_inner()
    }

    fn field(tag: Tag, value: Value) -> Field {
        Field {
            tag,
            ifd_num: In::PRIMARY,
            value,
        }
    }

    #[test]
    fn reads_caption_tags() {
        let bytes = tiff_with(&[
            field(Tag::Make, Value::Ascii(vec![b"Nikon".to_vec()])),
            field(Tag::Model, Value::Ascii(vec![b"D90".to_vec()])),
            field(Tag::FNumber, Value::Rational(vec![Rational::from((28, 10))])),
            field(Tag::ExposureTime, Value::Rational(vec![Rational::from((1, 125))])),
            field(Tag::PhotographicSensitivity, Value::Short(vec![400])),
        ]);

        let tags = KamadakExifReader::new().read_tags(&bytes).expect("tags");
        assert_eq!(tags.make.as_deref(), Some("Nikon"));
        assert_eq!(tags.model.as_deref(), Some("D90"));
        assert_eq!(tags.f_number, Some(2.8));
        assert_eq!(tags.exposure_time, Some(0.008));
        assert_eq!(tags.iso, Some(400));
        assert_eq!(tags.focal_length, None);
    }

    #[test]
    fn non_image_bytes_are_an_error() {
        assert!(KamadakExifReader::new().read_tags(b"not an image").is_err());
    }
}
