// SPDX-License-Identifier: MPL-2.0
//! Corner-handle resize rules.
//!
//! A resize is always computed from the rect captured when the gesture
//! started plus the total pointer delta since then, never incrementally, so
//! repeated pointer-move events cannot accumulate drift.

use crate::domain::geometry::{Point, Rect, Size};

/// Resize constraint bounds.
pub mod resize_bounds {
    /// Both dimensions must be strictly greater than this (pixels).
    pub const MIN_LAYER_SIZE: f32 = 50.0;
    /// Allowed deviation between candidate and original aspect ratio.
    pub const ASPECT_TOLERANCE: f32 = 0.1;
    /// Side of the square hit area of each corner handle (pixels).
    pub const HANDLE_SIZE: f32 = 10.0;
}

/// One of the four corner handles of the active layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// All handles, in hit-test priority order.
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
    ];

    /// The corner of `rect` this handle sits on.
    #[must_use]
    pub fn corner(self, rect: Rect) -> Point {
        match self {
            ResizeHandle::TopLeft => Point::new(rect.x(), rect.y()),
            ResizeHandle::TopRight => Point::new(rect.right(), rect.y()),
            ResizeHandle::BottomLeft => Point::new(rect.x(), rect.bottom()),
            ResizeHandle::BottomRight => Point::new(rect.right(), rect.bottom()),
        }
    }

    /// Square hit area of the handle for a layer occupying `rect`.
    #[must_use]
    pub fn hit_area(self, rect: Rect, handle_size: f32) -> Rect {
        Rect::centered_square(self.corner(rect), handle_size)
    }

    /// Handles on the left edge move it and shrink as the pointer moves right.
    #[must_use]
    pub fn moves_left_edge(self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::BottomLeft)
    }

    /// Handles on the top edge move it and shrink as the pointer moves down.
    #[must_use]
    pub fn moves_top_edge(self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::TopRight)
    }

    /// `true` for the handles whose drag axis runs top-left to bottom-right.
    #[must_use]
    pub fn is_main_diagonal(self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::BottomRight)
    }
}

/// Rules applied to every resize candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeConstraints {
    /// Candidates at or below this size in either dimension are rejected.
    pub min_size: f32,
    /// Keep the pre-gesture aspect ratio once the deviation exceeds
    /// `aspect_tolerance`.
    pub lock_aspect_ratio: bool,
    pub aspect_tolerance: f32,
}

impl Default for ResizeConstraints {
    fn default() -> Self {
        Self {
            min_size: resize_bounds::MIN_LAYER_SIZE,
            lock_aspect_ratio: false,
            aspect_tolerance: resize_bounds::ASPECT_TOLERANCE,
        }
    }
}

impl ResizeConstraints {
    /// Whether a candidate size passes the minimum-size floor.
    #[must_use]
    pub fn accepts(&self, size: Size) -> bool {
        size.width > self.min_size && size.height > self.min_size
    }
}

/// Computes the rect produced by dragging `handle` by `delta` from `original`.
///
/// Returns `None` when the candidate is rejected by the minimum-size floor, in
/// which case the caller keeps the current rect untouched.
#[must_use]
pub fn resize_rect(
    handle: ResizeHandle,
    original: Rect,
    delta: Point,
    constraints: &ResizeConstraints,
) -> Option<Rect> {
    let width = if handle.moves_left_edge() {
        original.width() - delta.x
    } else {
        original.width() + delta.x
    };
    let height = if handle.moves_top_edge() {
        original.height() - delta.y
    } else {
        original.height() + delta.y
    };

    let mut size = Size::new(width, height);
    if constraints.lock_aspect_ratio {
        size = preserve_aspect_ratio(original.size, size, constraints.aspect_tolerance);
    }

    if !constraints.accepts(size) {
        return None;
    }

    // Keep the corner opposite to the handle fixed.
    let x = if handle.moves_left_edge() {
        original.right() - size.width
    } else {
        original.x()
    };
    let y = if handle.moves_top_edge() {
        original.bottom() - size.height
    } else {
        original.y()
    };

    Some(Rect::from_origin_size(Point::new(x, y), size))
}

/// Snaps `candidate` back to the ratio of `original` when it drifts too far.
///
/// The longer candidate dimension wins and the shorter one is recomputed
/// from it.
#[must_use]
pub fn preserve_aspect_ratio(original: Size, candidate: Size, tolerance: f32) -> Size {
    let (Some(ratio), Some(candidate_ratio)) = (original.aspect_ratio(), candidate.aspect_ratio())
    else {
        return candidate;
    };
    if candidate.width <= 0.0 || (candidate_ratio - ratio).abs() <= tolerance {
        return candidate;
    }

    if candidate.width >= candidate.height {
        Size::new(candidate.width, candidate.width / ratio)
    } else {
        Size::new(candidate.height * ratio, candidate.height)
    }
}
