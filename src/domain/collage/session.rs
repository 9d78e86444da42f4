// SPDX-License-Identifier: MPL-2.0
//! The editor session: one object owning everything a collage edit needs.
//!
//! Every handler goes through [`EditorSession`], which keeps the derived
//! state (snap guides and the layer list) in step with the registry after
//! each mutation.

use super::gesture::{Affordance, GestureState, InteractionController, PointerDown};
use super::guides::SnapGuides;
use super::layer::{LayerDraft, LayerId};
use super::layer_list::LayerListView;
use super::placement::{estimate_text_size, TextMetrics};
use super::registry::LayerRegistry;
use super::resize::ResizeConstraints;
use crate::domain::geometry::{Point, Rect, Size};

/// Default editing surface, in logical pixels.
pub const DEFAULT_CONTAINER: Size = Size::new(800.0, 600.0);

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionSettings {
    pub constraints: ResizeConstraints,
    pub text_metrics: TextMetrics,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    registry: LayerRegistry,
    controller: InteractionController,
    guides: SnapGuides,
    layer_list: LayerListView,
    container: Rect,
    text_metrics: TextMetrics,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl EditorSession {
    #[must_use]
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            registry: LayerRegistry::new(),
            controller: InteractionController::new(settings.constraints),
            guides: SnapGuides::Hidden,
            layer_list: LayerListView::new(),
            container: Rect::from_origin_size(Point::ORIGIN, DEFAULT_CONTAINER),
            text_metrics: settings.text_metrics,
        }
    }

    // -------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------

    /// Registers a layer and makes it active.
    pub fn add_layer(&mut self, draft: LayerDraft) -> LayerId {
        let id = self.registry.add_layer(draft);
        self.refresh();
        id
    }

    /// Adds an editable text layer at `origin`, sized to fit `text`.
    pub fn add_text(&mut self, text: impl Into<String>, origin: Point) -> LayerId {
        let text = text.into();
        let size = estimate_text_size(&text, &self.text_metrics);
        self.add_layer(LayerDraft::text(text, Rect::from_origin_size(origin, size)))
    }

    pub fn activate(&mut self, id: LayerId) -> bool {
        let changed = self.registry.activate(id);
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn deactivate_all(&mut self) -> bool {
        let changed = self.registry.deactivate_all();
        if changed {
            self.refresh();
        }
        changed
    }

    /// Updates an editable text layer. Auto-sized layers follow their content.
    pub fn set_text(&mut self, id: LayerId, text: impl Into<String>) -> bool {
        let text = text.into();
        if !self.registry.set_text(id, text.as_str()) {
            return false;
        }
        if let Some(rect) = self
            .registry
            .layer(id)
            .filter(|layer| !layer.is_sized_by_user())
            .map(|layer| layer.rect())
        {
            let size = estimate_text_size(&text, &self.text_metrics);
            self.registry.fit_to(id, Rect::from_origin_size(rect.origin, size));
        }
        self.refresh();
        true
    }

    // -------------------------------------------------------------------------
    // Pointer input (container-local coordinates)
    // -------------------------------------------------------------------------

    pub fn pointer_down(&mut self, position: Point) -> PointerDown {
        let outcome = self.controller.pointer_down(&mut self.registry, position);
        if outcome != PointerDown::Ignored {
            self.refresh();
        }
        outcome
    }

    pub fn pointer_move(&mut self, position: Point) -> bool {
        let changed = self.controller.pointer_move(&mut self.registry, position);
        if changed {
            self.refresh_guides();
        }
        changed
    }

    pub fn pointer_up(&mut self) -> bool {
        self.controller.pointer_up()
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.controller.pointer_leave()
    }

    /// Ends any gesture, e.g. when the window loses focus.
    pub fn cancel_gesture(&mut self) -> bool {
        self.controller.pointer_up()
    }

    // -------------------------------------------------------------------------
    // Layout & settings
    // -------------------------------------------------------------------------

    /// Records the container's bounds (e.g. after a window resize).
    pub fn set_container(&mut self, container: Rect) {
        if self.container != container {
            self.container = container;
            self.refresh_guides();
        }
    }

    pub fn set_constraints(&mut self, constraints: ResizeConstraints) {
        self.controller.set_constraints(constraints);
    }

    /// Recomputes guides and resyncs the layer list.
    pub fn refresh(&mut self) {
        self.refresh_guides();
        self.layer_list.sync(&self.registry);
    }

    fn refresh_guides(&mut self) {
        self.guides = SnapGuides::compute(self.registry.active(), self.container);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    #[must_use]
    pub fn guides(&self) -> SnapGuides {
        self.guides
    }

    #[must_use]
    pub fn layer_list(&self) -> &LayerListView {
        &self.layer_list
    }

    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.controller.state()
    }

    #[must_use]
    pub fn text_metrics(&self) -> &TextMetrics {
        &self.text_metrics
    }

    #[must_use]
    pub fn constraints(&self) -> &ResizeConstraints {
        self.controller.constraints()
    }

    #[must_use]
    pub fn handle_size(&self) -> f32 {
        self.controller.handle_size()
    }

    #[must_use]
    pub fn affordance(&self, hover: Option<Point>) -> Affordance {
        self.controller.affordance(&self.registry, hover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collage::resize::{resize_bounds, ResizeHandle};
    use crate::domain::collage::ImageKey;

    fn assert_guides_follow_active(session: &EditorSession) {
        let container = session.container();
        match (session.registry().active(), session.guides()) {
            (Some(layer), SnapGuides::Visible { horizontal_y, vertical_x }) => {
                let rect = layer.rect().translated(container.origin);
                assert_eq!(vertical_x, rect.x() + rect.width() / 2.0 - container.x());
                assert_eq!(horizontal_y, rect.y() + rect.height() / 2.0 - container.y());
            }
            (None, SnapGuides::Hidden) => {}
            (active, guides) => panic!("guides {guides:?} out of sync with {active:?}"),
        }
    }

    #[test]
    fn guides_follow_every_mutation() {
        let mut session = EditorSession::default();
        session.set_container(Rect::new(30.0, 40.0, 800.0, 600.0));
        let image = session.add_layer(LayerDraft::image(ImageKey::new(1), Rect::new(80.0, 140.0, 640.0, 320.0)));
        assert_guides_follow_active(&session);

        session.pointer_down(Point::new(100.0, 200.0));
        session.pointer_move(Point::new(120.0, 230.0));
        assert_guides_follow_active(&session);
        session.pointer_up();

        // Bottom-right handle of the moved image at (740, 490).
        session.pointer_down(Point::new(740.0, 490.0));
        assert!(matches!(session.gesture(), GestureState::Resizing { layer, .. } if layer == image));
        session.pointer_move(Point::new(700.0, 470.0));
        assert_guides_follow_active(&session);
        session.pointer_up();

        session.set_container(Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert_guides_follow_active(&session);
    }

    #[test]
    fn empty_space_click_hides_guides() {
        let mut session = EditorSession::default();
        session.add_text("hello", Point::new(100.0, 100.0));
        assert!(session.guides().is_visible());

        assert_eq!(session.pointer_down(Point::new(790.0, 590.0)), PointerDown::Missed);
        assert_eq!(session.guides(), SnapGuides::Hidden);
        assert_eq!(session.registry().active_id(), None);
        assert!(session.layer_list().entries().iter().all(|e| !e.active));
    }

    #[test]
    fn layer_list_tracks_activation() {
        let mut session = EditorSession::default();
        let image = session.add_layer(LayerDraft::image(ImageKey::new(1), Rect::new(0.0, 0.0, 200.0, 200.0)));
        let text = session.add_text("caption", Point::new(0.0, 200.0));
        assert_eq!(session.layer_list().entries()[0].id, text);
        assert!(session.layer_list().entries()[0].active);

        assert!(session.activate(image));
        let active: Vec<_> = session.layer_list().entries().iter().filter(|e| e.active).map(|e| e.id).collect();
        assert_eq!(active, vec![image]);
    }

    #[test]
    fn text_layers_resize_with_content_until_user_resizes() {
        let mut session = EditorSession::default();
        let text = session.add_text("", Point::new(100.0, 100.0));
        let initial = session.registry().layer(text).expect("text").rect();

        assert!(session.set_text(text, "a much longer line of caption text"));
        let grown = session.registry().layer(text).expect("text").rect();
        assert!(grown.width() > initial.width());
        assert_eq!(grown.origin, initial.origin);

        // Drag the bottom-right handle.
        let corner = Point::new(grown.right(), grown.bottom());
        session.pointer_down(corner);
        session.pointer_move(corner + Point::new(30.0, 30.0));
        session.pointer_up();
        let resized = session.registry().layer(text).expect("text").rect();

        assert!(session.set_text(text, "x"));
        assert_eq!(session.registry().layer(text).expect("text").rect(), resized);
    }

    #[test]
    fn handles_extend_half_their_size_past_the_corner() {
        let mut session = EditorSession::default();
        session.add_layer(LayerDraft::image(ImageKey::new(1), Rect::new(100.0, 100.0, 200.0, 100.0)));
        let reach = session.handle_size() / 2.0;
        assert_eq!(session.handle_size(), resize_bounds::HANDLE_SIZE);

        let inside = Point::new(300.0 + reach - 1.0, 200.0 + reach - 1.0);
        assert!(matches!(session.pointer_down(inside), PointerDown::Resize(_, ResizeHandle::BottomRight)));
        session.pointer_up();

        let outside = Point::new(300.0 + reach + 1.0, 200.0 + reach + 1.0);
        assert_eq!(session.pointer_down(outside), PointerDown::Missed);
    }

    #[test]
    fn focus_loss_ends_gesture() {
        let mut session = EditorSession::default();
        session.add_text("t", Point::new(100.0, 100.0));
        session.pointer_down(Point::new(110.0, 110.0));
        assert!(!matches!(session.gesture(), GestureState::Idle));
        assert!(session.cancel_gesture());
        assert_eq!(session.gesture(), GestureState::Idle);
        assert_eq!(session.affordance(None), Affordance::Default);
    }
}
