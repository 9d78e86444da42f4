// SPDX-License-Identifier: MPL-2.0
//! Plain 2D geometry value objects used by the collage domain.
//!
//! All coordinates are logical pixels. These types intentionally mirror the
//! shape of `iced::Point`/`iced::Size`/`iced::Rectangle` so the presentation
//! layer can convert without friction, while keeping the domain free of any
//! GUI dependency.

use std::ops::{Add, Sub};

// =============================================================================
// Point
// =============================================================================

/// A position (or offset) in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// =============================================================================
// Size
// =============================================================================

/// A width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, or `None` when the height is not positive.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f32> {
        (self.height > 0.0).then(|| self.width / self.height)
    }

    /// Returns `true` if either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.origin.x
    }

    #[must_use]
    pub fn y(&self) -> f32 {
        self.origin.y
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Geometric center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns `true` if `point` lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x() && point.x <= self.right() && point.y >= self.y() && point.y <= self.bottom()
    }

    /// Returns the same rectangle shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Point) -> Rect {
        Rect::from_origin_size(self.origin + offset, self.size)
    }

    /// A square of side `side` centered on `point`.
    #[must_use]
    pub fn centered_square(point: Point, side: f32) -> Rect {
        Rect::new(point.x - side / 2.0, point.y - side / 2.0, side, side)
    }
}
