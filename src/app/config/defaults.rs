// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Editor**: Resize floor, aspect lock and snap guides
//! - **Ingest**: Frame, placement and caption settings

use crate::domain::collage::placement::placement_bounds;
use crate::domain::collage::resize::resize_bounds;

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Default minimum layer size in pixels (exclusive).
pub const DEFAULT_MIN_LAYER_SIZE: f32 = resize_bounds::MIN_LAYER_SIZE;

/// Smallest configurable minimum layer size.
pub const MIN_MIN_LAYER_SIZE: f32 = 10.0;

/// Largest configurable minimum layer size.
pub const MAX_MIN_LAYER_SIZE: f32 = 400.0;

/// Aspect ratio lock is off unless enabled.
pub const DEFAULT_LOCK_ASPECT_RATIO: bool = false;

/// Default tolerated aspect ratio deviation before correction kicks in.
pub const DEFAULT_ASPECT_TOLERANCE: f32 = resize_bounds::ASPECT_TOLERANCE;

/// Tolerance bounds.
pub const MIN_ASPECT_TOLERANCE: f32 = 0.0;
pub const MAX_ASPECT_TOLERANCE: f32 = 2.0;

/// Snap guides are shown by default.
pub const DEFAULT_SHOW_SNAP_GUIDES: bool = true;

// ==========================================================================
// Ingest Defaults
// ==========================================================================

pub const DEFAULT_FRAME_ENABLED: bool = true;

pub const DEFAULT_FRAME_RATIO: f64 = placement_bounds::DEFAULT_FRAME_RATIO;
pub const MIN_FRAME_RATIO: f64 = placement_bounds::MIN_FRAME_RATIO;
pub const MAX_FRAME_RATIO: f64 = placement_bounds::MAX_FRAME_RATIO;

pub const DEFAULT_PLACEMENT_SCALE: f32 = placement_bounds::DEFAULT_SCALE;
pub const MIN_PLACEMENT_SCALE: f32 = placement_bounds::MIN_SCALE;
pub const MAX_PLACEMENT_SCALE: f32 = placement_bounds::MAX_SCALE;

pub const DEFAULT_EXIF_CAPTION: bool = true;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_within_bounds() {
        assert!((MIN_MIN_LAYER_SIZE..=MAX_MIN_LAYER_SIZE).contains(&DEFAULT_MIN_LAYER_SIZE));
        assert!((MIN_ASPECT_TOLERANCE..=MAX_ASPECT_TOLERANCE).contains(&DEFAULT_ASPECT_TOLERANCE));
        assert!((MIN_FRAME_RATIO..=MAX_FRAME_RATIO).contains(&DEFAULT_FRAME_RATIO));
        assert!((MIN_PLACEMENT_SCALE..=MAX_PLACEMENT_SCALE).contains(&DEFAULT_PLACEMENT_SCALE));
    }
}
