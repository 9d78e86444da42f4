// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture state machine (drag and corner resize).
//!
//! ```text
//!            pointer-down on body            pointer-down on handle
//!   Dragging <-------------------- Idle --------------------> Resizing
//!      |                           ^  ^                          |
//!      +--- up / leave / blur -----+  +---- up / leave / blur ---+
//! ```
//!
//! Only one gesture can exist at a time; a pointer-down while a gesture is in
//! progress is ignored.

use super::layer::LayerId;
use super::registry::LayerRegistry;
use super::resize::{resize_bounds, resize_rect, ResizeConstraints, ResizeHandle};
use crate::domain::geometry::{Point, Rect};

/// Current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        layer: LayerId,
        /// Pointer position minus the layer's top-left at pointer-down.
        anchor: Point,
    },
    Resizing {
        layer: LayerId,
        handle: ResizeHandle,
        /// Pointer position at pointer-down.
        origin: Point,
        /// Layer rect at pointer-down.
        original: Rect,
    },
}

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    /// Nothing was under the pointer; the active layer was cleared.
    Missed,
    /// A drag started on this layer (which is now active).
    Drag(LayerId),
    /// A resize started on the active layer.
    Resize(LayerId, ResizeHandle),
    /// A gesture was already in progress.
    Ignored,
}

/// Cursor affordance to present for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Affordance {
    #[default]
    Default,
    /// Hovering a layer body.
    Grab,
    /// Dragging a layer.
    Grabbing,
    /// Hovering or dragging a resize handle.
    Resize(ResizeHandle),
}

/// Drives drag and resize gestures against a [`LayerRegistry`].
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: GestureState,
    constraints: ResizeConstraints,
    handle_size: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(ResizeConstraints::default())
    }
}

impl InteractionController {
    #[must_use]
    pub fn new(constraints: ResizeConstraints) -> Self {
        Self {
            state: GestureState::Idle,
            constraints,
            handle_size: resize_bounds::HANDLE_SIZE,
        }
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn constraints(&self) -> &ResizeConstraints {
        &self.constraints
    }

    pub fn set_constraints(&mut self, constraints: ResizeConstraints) {
        self.constraints = constraints;
    }

    #[must_use]
    pub fn handle_size(&self) -> f32 {
        self.handle_size
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    /// Starts a gesture at `position` (container coordinates).
    pub fn pointer_down(&mut self, registry: &mut LayerRegistry, position: Point) -> PointerDown {
        if !self.is_idle() {
            return PointerDown::Ignored;
        }

        if let Some((layer, handle)) = self.handle_at(registry, position) {
            let Some(original) = registry.layer(layer).map(|l| l.rect()) else {
                return PointerDown::Ignored;
            };
            self.state = GestureState::Resizing {
                layer,
                handle,
                origin: position,
                original,
            };
            return PointerDown::Resize(layer, handle);
        }

        let Some(layer) = registry.topmost_at(position) else {
            registry.deactivate_all();
            return PointerDown::Missed;
        };

        registry.activate(layer);
        let Some(top_left) = registry.layer(layer).map(|l| l.position()) else {
            return PointerDown::Ignored;
        };
        self.state = GestureState::Dragging {
            layer,
            anchor: position - top_left,
        };
        PointerDown::Drag(layer)
    }

    /// Advances the current gesture. Returns `true` if a layer changed.
    pub fn pointer_move(&mut self, registry: &mut LayerRegistry, position: Point) -> bool {
        match self.state {
            GestureState::Idle => false,
            GestureState::Dragging { layer, anchor } => registry.move_to(layer, position - anchor),
            GestureState::Resizing {
                layer,
                handle,
                origin,
                original,
            } => match resize_rect(handle, original, position - origin, &self.constraints) {
                Some(rect) => registry.resize_to(layer, rect),
                None => false,
            },
        }
    }

    /// Ends the current gesture. Returns `true` if one was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let was_active = !self.is_idle();
        self.state = GestureState::Idle;
        was_active
    }

    /// Pointer left the container: same as releasing it.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    /// Finds the handle of the active layer under `position`, if any.
    #[must_use]
    pub fn handle_at(&self, registry: &LayerRegistry, position: Point) -> Option<(LayerId, ResizeHandle)> {
        let active = registry.active()?;
        ResizeHandle::ALL
            .into_iter()
            .find(|handle| handle.hit_area(active.rect(), self.handle_size).contains(position))
            .map(|handle| (active.id(), handle))
    }

    /// Cursor affordance for the current gesture, or for hovering at `hover`.
    #[must_use]
    pub fn affordance(&self, registry: &LayerRegistry, hover: Option<Point>) -> Affordance {
        match self.state {
            GestureState::Dragging { .. } => Affordance::Grabbing,
            GestureState::Resizing { handle, .. } => Affordance::Resize(handle),
            GestureState::Idle => {
                let Some(position) = hover else {
                    return Affordance::Default;
                };
                if let Some((_, handle)) = self.handle_at(registry, position) {
                    Affordance::Resize(handle)
                } else if registry.topmost_at(position).is_some() {
                    Affordance::Grab
                } else {
                    Affordance::Default
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collage::{ImageKey, LayerDraft};

    fn setup() -> (LayerRegistry, LayerId, LayerId) {
        let mut registry = LayerRegistry::new();
        let image = registry.add_layer(LayerDraft::image(ImageKey::new(1), Rect::new(100.0, 100.0, 200.0, 100.0)));
        let text = registry.add_layer(LayerDraft::text("caption", Rect::new(400.0, 400.0, 100.0, 60.0)));
        (registry, image, text)
    }

    #[test]
    fn drag_moves_layer_by_pointer_minus_anchor() {
        let (mut registry, image, _) = setup();
        let mut controller = InteractionController::default();

        assert_eq!(controller.pointer_down(&mut registry, Point::new(150.0, 120.0)), PointerDown::Drag(image));
        assert_eq!(registry.active_id(), Some(image));
        assert_eq!(
            controller.state(),
            GestureState::Dragging {
                layer: image,
                anchor: Point::new(50.0, 20.0)
            }
        );

        assert!(controller.pointer_move(&mut registry, Point::new(250.0, 320.0)));
        let rect = registry.layer(image).expect("image").rect();
        assert_eq!(rect, Rect::new(200.0, 300.0, 200.0, 100.0));
    }

    #[test]
    fn pointer_down_on_empty_space_deactivates() {
        let (mut registry, _, _) = setup();
        let mut controller = InteractionController::default();
        assert_eq!(controller.pointer_down(&mut registry, Point::new(5.0, 5.0)), PointerDown::Missed);
        assert_eq!(registry.active_id(), None);
        assert!(controller.is_idle());
    }

    #[test]
    fn handle_of_active_layer_starts_resize() {
        let (mut registry, _, text) = setup();
        let mut controller = InteractionController::default();

        // Bottom-right corner of the text layer at (500, 460).
        let down = controller.pointer_down(&mut registry, Point::new(501.0, 459.0));
        assert_eq!(down, PointerDown::Resize(text, ResizeHandle::BottomRight));

        assert!(controller.pointer_move(&mut registry, Point::new(541.0, 499.0)));
        let rect = registry.layer(text).expect("text").rect();
        assert_eq!(rect, Rect::new(400.0, 400.0, 140.0, 100.0));
        assert!(registry.layer(text).expect("text").is_sized_by_user());
    }

    #[test]
    fn handles_of_inactive_layers_are_not_hit() {
        let (mut registry, image, _) = setup();
        let mut controller = InteractionController::default();
        // Bottom-right corner of the (inactive) image layer: lands on its body edge.
        let down = controller.pointer_down(&mut registry, Point::new(300.0, 200.0));
        assert_eq!(down, PointerDown::Drag(image));
    }

    #[test]
    fn rejected_resize_keeps_previous_rect() {
        let (mut registry, _, text) = setup();
        let mut controller = InteractionController::default();
        controller.pointer_down(&mut registry, Point::new(500.0, 460.0));

        assert!(controller.pointer_move(&mut registry, Point::new(520.0, 470.0)));
        let accepted = registry.layer(text).expect("text").rect();

        // Shrinks height to 50 -> rejected.
        assert!(!controller.pointer_move(&mut registry, Point::new(520.0, 450.0)));
        assert_eq!(registry.layer(text).expect("text").rect(), accepted);
    }

    #[test]
    fn pointer_up_and_leave_end_gesture() {
        let (mut registry, _, _) = setup();
        let mut controller = InteractionController::default();

        controller.pointer_down(&mut registry, Point::new(150.0, 150.0));
        assert!(controller.pointer_up());
        assert!(controller.is_idle());
        assert!(!controller.pointer_move(&mut registry, Point::new(0.0, 0.0)));

        controller.pointer_down(&mut registry, Point::new(150.0, 150.0));
        assert!(controller.pointer_leave());
        assert!(!controller.pointer_up());
    }

    #[test]
    fn second_pointer_down_is_ignored_mid_gesture() {
        let (mut registry, image, text) = setup();
        let mut controller = InteractionController::default();
        controller.pointer_down(&mut registry, Point::new(150.0, 150.0));
        assert_eq!(controller.pointer_down(&mut registry, Point::new(450.0, 420.0)), PointerDown::Ignored);
        assert_eq!(registry.active_id(), Some(image));
        assert_ne!(registry.active_id(), Some(text));
    }

    #[test]
    fn affordance_tracks_state_and_hover() {
        let (mut registry, _, _) = setup();
        let mut controller = InteractionController::default();

        assert_eq!(controller.affordance(&registry, None), Affordance::Default);
        assert_eq!(controller.affordance(&registry, Some(Point::new(450.0, 420.0))), Affordance::Grab);
        assert_eq!(
            controller.affordance(&registry, Some(Point::new(400.0, 400.0))),
            Affordance::Resize(ResizeHandle::TopLeft)
        );

        controller.pointer_down(&mut registry, Point::new(150.0, 150.0));
        assert_eq!(controller.affordance(&registry, None), Affordance::Grabbing);
        controller.pointer_up();
        assert_eq!(controller.affordance(&registry, Some(Point::new(5.0, 5.0))), Affordance::Default);
    }
}
