// SPDX-License-Identifier: MPL-2.0
//! Initial placement of new layers.

use crate::domain::geometry::{Point, Rect, Size};

/// Placement defaults and bounds.
pub mod placement_bounds {
    /// Share of the container an imported image occupies along its
    /// constraining axis.
    pub const DEFAULT_SCALE: f32 = 0.8;
    pub const MIN_SCALE: f32 = 0.1;
    pub const MAX_SCALE: f32 = 1.0;

    /// Ratio of the white frame to the image it surrounds.
    pub const DEFAULT_FRAME_RATIO: f64 = 1.2;
    pub const MIN_FRAME_RATIO: f64 = 1.0;
    pub const MAX_FRAME_RATIO: f64 = 3.0;

    /// Where text added from the toolbar appears.
    pub const DEFAULT_TEXT_X: f32 = 100.0;
    pub const DEFAULT_TEXT_Y: f32 = 100.0;
}

/// Fits an image into `container`, centered, preserving its aspect ratio.
///
/// When the image is wider than the container (by ratio), its width is
/// `container.width * scale`; otherwise its height is `container.height * scale`.
/// Returns `None` for empty images or containers.
#[must_use]
pub fn fit_in_container(image: Size, container: Size, scale: f32) -> Option<Rect> {
    let image_ratio = image.aspect_ratio().filter(|r| *r > 0.0)?;
    let container_ratio = container.aspect_ratio().filter(|r| *r > 0.0)?;

    let size = if image_ratio > container_ratio {
        let width = container.width * scale;
        Size::new(width, width / image_ratio)
    } else {
        let height = container.height * scale;
        Size::new(height * image_ratio, height)
    };

    let origin = Point::new(
        (container.width - size.width) / 2.0,
        (container.height - size.height) / 2.0,
    );
    Some(Rect::from_origin_size(origin, size))
}

/// Pixel size of the white frame drawn around a `width` x `height` image.
///
/// Fractional pixels are truncated.
#[must_use]
pub fn framed_size(width: u32, height: u32, ratio: f64) -> (u32, u32) {
    let scale = |value: u32| (f64::from(value) * ratio).trunc() as u32;
    (scale(width), scale(height))
}

/// Top-left of the caption placed directly below `image`.
#[must_use]
pub fn caption_origin(image: Rect) -> Point {
    Point::new(image.x(), image.bottom())
}

/// Where toolbar-created text layers go.
#[must_use]
pub fn default_text_origin() -> Point {
    Point::new(placement_bounds::DEFAULT_TEXT_X, placement_bounds::DEFAULT_TEXT_Y)
}

/// Approximate font metrics used to size text layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub font_size: f32,
    /// Average advance of one character, as a fraction of `font_size`.
    pub glyph_width: f32,
    /// Line height as a multiple of `font_size`.
    pub line_height: f32,
    /// Inner padding on every side.
    pub padding: f32,
    /// Width and height are never below this.
    pub min_extent: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            glyph_width: 0.6,
            line_height: 1.3,
            padding: 5.0,
            min_extent: 60.0,
        }
    }
}

/// Estimates the box needed to show `text`.
///
/// Wide (non-ASCII) characters count as two glyphs, which covers CJK captions.
#[must_use]
pub fn estimate_text_size(text: &str, metrics: &TextMetrics) -> Size {
    let mut lines = 0usize;
    let mut widest = 0usize;
    for line in text.lines() {
        lines += 1;
        let columns: usize = line.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum();
        widest = widest.max(columns);
    }
    let lines = lines.max(1);

    let width = widest as f32 * metrics.font_size * metrics.glyph_width + metrics.padding * 2.0;
    let height = lines as f32 * metrics.font_size * metrics.line_height + metrics.padding * 2.0;
    Size::new(width.max(metrics.min_extent), height.max(metrics.min_extent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_is_bounded_by_width() {
        let rect = fit_in_container(Size::new(100.0, 50.0), Size::new(800.0, 600.0), 0.8).expect("placed");
        assert_eq!(rect, Rect::new(80.0, 140.0, 640.0, 320.0));
        assert_eq!(rect.size.aspect_ratio(), Some(2.0));
    }

    #[test]
    fn tall_image_is_bounded_by_height() {
        let rect = fit_in_container(Size::new(300.0, 600.0), Size::new(800.0, 600.0), 0.8).expect("placed");
        assert_eq!(rect.size, Size::new(240.0, 480.0));
        assert_eq!(rect.center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn empty_inputs_are_not_placed() {
        assert_eq!(fit_in_container(Size::ZERO, Size::new(800.0, 600.0), 0.8), None);
        assert_eq!(fit_in_container(Size::new(10.0, 10.0), Size::ZERO, 0.8), None);
    }

    #[test]
    fn frame_truncates_fractional_pixels() {
        assert_eq!(framed_size(100, 50, 1.2), (120, 60));
        assert_eq!(framed_size(101, 33, 1.2), (121, 39));
        assert_eq!(framed_size(10, 10, 1.3), (13, 13));
        assert_eq!(framed_size(64, 64, 1.0), (64, 64));
        assert_eq!(framed_size(7, 3, 1.5), (10, 4));
    }

    #[test]
    fn caption_sits_below_image() {
        let image = Rect::new(80.0, 140.0, 640.0, 320.0);
        assert_eq!(caption_origin(image), Point::new(80.0, 460.0));
    }

    #[test]
    fn text_size_grows_with_content() {
        let metrics = TextMetrics {
            min_extent: 0.0,
            ..TextMetrics::default()
        };
        let one = estimate_text_size("a fairly long single line of caption", &metrics);
        let two = estimate_text_size("a fairly long single line of caption\nsecond", &metrics);
        assert_eq!(one.width, two.width);
        assert!(two.height > one.height);
    }

    #[test]
    fn short_text_is_held_at_min_extent() {
        let metrics = TextMetrics::default();
        assert_eq!(estimate_text_size("", &metrics), Size::new(60.0, 60.0));

        // One and two lines both stay under the 60px floor; three lines clear it.
        let one = estimate_text_size("caption", &metrics);
        let two = estimate_text_size("caption
second", &metrics);
        let three = estimate_text_size("caption
second
third", &metrics);
        assert_eq!(one.height, 60.0);
        assert_eq!(two.height, 60.0);
        assert!(three.height > 60.0);
    }

    #[test]
    fn wide_characters_count_double() {
        let metrics = TextMetrics {
            min_extent: 0.0,
            padding: 0.0,
            ..TextMetrics::default()
        };
        let ascii = estimate_text_size("abcd", &metrics);
        let cjk = estimate_text_size("カメラ", &metrics);
        assert!(cjk.width > ascii.width);
    }
}
