// SPDX-License-Identifier: MPL-2.0
//! Caption text synthesized from EXIF tags.

use super::types::ExifTags;

/// Labels prefixed to each caption line.
///
/// The default set is Japanese; the application substitutes translated
/// labels when the UI language has them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionLabels {
    pub camera: String,
    pub focal_length: String,
    pub aperture: String,
    pub iso: String,
    pub shutter_speed: String,
}

impl Default for CaptionLabels {
    fn default() -> Self {
        Self {
            camera: "カメラ".to_string(),
            focal_length: "焦点距離".to_string(),
            aperture: "絞り".to_string(),
            iso: "ISO感度".to_string(),
            shutter_speed: "シャッタースピード".to_string(),
        }
    }
}

/// Formats `tags` as a multi-line caption.
///
/// Lines, in order: camera, focal length, aperture, ISO, shutter speed.
/// Missing tags drop their line. Numbers use their shortest decimal form
/// (`50`, `2.8`, `0.008`). The result is trimmed and may be empty.
#[must_use]
pub fn format_caption(tags: &ExifTags, labels: &CaptionLabels) -> String {
    let mut lines = Vec::with_capacity(5);

    if let Some((make, model)) = tags.camera() {
        lines.push(format!("{}: {make} {model}", labels.camera));
    }
    if let Some(focal_length) = tags.focal_length() {
        lines.push(format!("{}: {focal_length}mm", labels.focal_length));
    }
    if let Some(f_number) = tags.f_number() {
        lines.push(format!("{}: f/{f_number}", labels.aperture));
    }
    if let Some(iso) = tags.iso() {
        lines.push(format!("{}: {iso}", labels.iso));
    }
    if let Some(exposure_time) = tags.exposure_time() {
        lines.push(format!("{}: {exposure_time}s", labels.shutter_speed));
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_and_model_only() {
        let tags = ExifTags {
            make: Some("Nikon".into()),
            model: Some("D90".into()),
            ..ExifTags::default()
        };
        assert_eq!(format_caption(&tags, &CaptionLabels::default()), "カメラ: Nikon D90");
    }

    #[test]
    fn all_lines_in_order() {
        let tags = ExifTags {
            make: Some("Canon".into()),
            model: Some("EOS 5D".into()),
            focal_length: Some(50.0),
            f_number: Some(2.8),
            iso: Some(400),
            exposure_time: Some(0.008),
        };
        assert_eq!(
            format_caption(&tags, &CaptionLabels::default()),
            "カメラ: Canon EOS 5D\n焦点距離: 50mm\n絞り: f/2.8\nISO感度: 400\nシャッタースピード: 0.008s"
        );
    }

    #[test]
    fn model_without_make_is_omitted() {
        let tags = ExifTags {
            model: Some("D90".into()),
            iso: Some(200),
            ..ExifTags::default()
        };
        assert_eq!(format_caption(&tags, &CaptionLabels::default()), "ISO感度: 200");
    }

    #[test]
    fn no_tags_yields_empty_caption() {
        assert_eq!(format_caption(&ExifTags::default(), &CaptionLabels::default()), "");
    }

    #[test]
    fn custom_labels() {
        let labels = CaptionLabels {
            camera: "Camera".into(),
            focal_length: "Focal length".into(),
            aperture: "Aperture".into(),
            iso: "ISO".into(),
            shutter_speed: "Shutter".into(),
        };
        let tags = ExifTags {
            f_number: Some(4.0),
            ..ExifTags::default()
        };
        assert_eq!(format_caption(&tags, &labels), "Aperture: f/4");
    }
}
