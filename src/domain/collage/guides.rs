// SPDX-License-Identifier: MPL-2.0
//! Center snap guides for the active layer.

use super::layer::Layer;
use crate::domain::geometry::{Point, Rect};

/// Guide lines crossing at the active layer's center.
///
/// Positions are relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SnapGuides {
    #[default]
    Hidden,
    Visible {
        /// Y of the horizontal guide.
        horizontal_y: f32,
        /// X of the vertical guide.
        vertical_x: f32,
    },
}

impl SnapGuides {
    /// Computes guides for `layer` inside `container`.
    ///
    /// Layer rects are stored relative to the container, so the center is
    /// lifted to absolute coordinates and brought back by subtracting the
    /// container origin. The result does not depend on where the container
    /// sits on screen.
    #[must_use]
    pub fn compute(layer: Option<&Layer>, container: Rect) -> Self {
        let Some(layer) = layer.filter(|layer| layer.is_active()) else {
            return SnapGuides::Hidden;
        };
        let center = layer.rect().translated(container.origin).center() - container.origin;
        SnapGuides::Visible {
            horizontal_y: center.y,
            vertical_x: center.x,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, SnapGuides::Visible { .. })
    }

    /// Crossing point of the two guides, if shown.
    #[must_use]
    pub fn center(self) -> Option<Point> {
        match self {
            SnapGuides::Hidden => None,
            SnapGuides::Visible {
                horizontal_y,
                vertical_x,
            } => Some(Point::new(vertical_x, horizontal_y)),
        }
    }
}
