// SPDX-License-Identifier: MPL-2.0
//! Camera tags read from an image's EXIF block.

/// The subset of EXIF tags used to caption a photo.
///
/// Every field is optional; a missing tag simply leaves its caption line out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifTags {
    pub make: Option<String>,
    pub model: Option<String>,
    /// Millimetres.
    pub focal_length: Option<f64>,
    pub f_number: Option<f64>,
    pub iso: Option<u32>,
    /// Seconds.
    pub exposure_time: Option<f64>,
}

impl ExifTags {
    /// Returns `true` if no usable tag is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.camera().is_none()
            && self.focal_length().is_none()
            && self.f_number().is_none()
            && self.iso().is_none()
            && self.exposure_time().is_none()
    }

    /// Make and model, only when both are present and non-blank.
    #[must_use]
    pub fn camera(&self) -> Option<(&str, &str)> {
        let make = non_blank(self.make.as_deref())?;
        let model = non_blank(self.model.as_deref())?;
        Some((make, model))
    }

    #[must_use]
    pub fn focal_length(&self) -> Option<f64> {
        positive(self.focal_length)
    }

    #[must_use]
    pub fn f_number(&self) -> Option<f64> {
        positive(self.f_number)
    }

    #[must_use]
    pub fn iso(&self) -> Option<u32> {
        self.iso.filter(|iso| *iso > 0)
    }

    #[must_use]
    pub fn exposure_time(&self) -> Option<f64> {
        positive(self.exposure_time)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// Zero and non-finite readings carry no information.
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
