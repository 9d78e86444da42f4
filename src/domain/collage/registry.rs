// SPDX-License-Identifier: MPL-2.0
//! Ordered layer storage with single-active-layer tracking.
//!
//! Invariants:
//! - layers are kept in creation order; later layers paint on top
//! - every id appears at most once
//! - at most one layer has its active flag set, and `active` always names it

use super::layer::{Layer, LayerContent, LayerDraft, LayerId, LayerKind, LayerName};
use crate::domain::geometry::{Point, Rect};

/// Insertion-ordered collection of layers.
#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
    active: Option<LayerId>,
    next_id: u64,
}

impl LayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer, names it and makes it the active layer.
    pub fn add_layer(&mut self, draft: LayerDraft) -> LayerId {
        self.next_id += 1;
        let id = LayerId::new(self.next_id);

        let name = match draft.content.kind() {
            LayerKind::Image => LayerName::Image,
            LayerKind::Text => LayerName::Text(self.count_of(LayerKind::Text) + 1),
        };

        self.layers.push(Layer {
            id,
            name,
            content: draft.content,
            rect: draft.rect,
            active: false,
            sized_by_user: false,
        });
        self.activate(id);
        id
    }

    /// Makes `id` the active layer.
    ///
    /// The previously active layer is deactivated and, if it is a text layer,
    /// locked against further editing. Returns `false` when nothing changed
    /// (unknown id, or `id` already active).
    pub fn activate(&mut self, id: LayerId) -> bool {
        if self.active == Some(id) || self.index_of(id).is_none() {
            return false;
        }

        if let Some(previous) = self.active.take() {
            if let Some(layer) = self.get_mut(previous) {
                layer.active = false;
                layer.lock_text();
            }
        }

        if let Some(layer) = self.get_mut(id) {
            layer.active = true;
            self.active = Some(id);
        }
        true
    }

    /// Clears the active layer without choosing a replacement.
    ///
    /// Returns `false` if no layer was active.
    pub fn deactivate_all(&mut self) -> bool {
        let Some(previous) = self.active.take() else {
            return false;
        };
        if let Some(layer) = self.get_mut(previous) {
            layer.active = false;
        }
        true
    }

    /// Replaces the text of an editable text layer. Anything else is ignored.
    pub fn set_text(&mut self, id: LayerId, text: impl Into<String>) -> bool {
        let Some(layer) = self.get_mut(id) else {
            return false;
        };
        match &mut layer.content {
            LayerContent::Text {
                text: current,
                editable: true,
            } => {
                *current = text.into();
                true
            }
            _ => false,
        }
    }

    /// Moves a layer without touching its size.
    pub(crate) fn move_to(&mut self, id: LayerId, origin: Point) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.rect.origin = origin;
                true
            }
            None => false,
        }
    }

    /// Replaces a layer's rect as the result of a user resize.
    pub(crate) fn resize_to(&mut self, id: LayerId, rect: Rect) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.rect = rect;
                layer.sized_by_user = true;
                true
            }
            None => false,
        }
    }

    /// Replaces a layer's rect as the result of content-driven sizing.
    pub(crate) fn fit_to(&mut self, id: LayerId, rect: Rect) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.rect = rect;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    #[must_use]
    pub fn active_id(&self) -> Option<LayerId> {
        self.active
    }

    #[must_use]
    pub fn active(&self) -> Option<&Layer> {
        self.active.and_then(|id| self.layer(id))
    }

    /// Iterates layers in creation order (bottom to top).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Layer> {
        self.layers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the topmost layer whose bounds contain `point`.
    #[must_use]
    pub fn topmost_at(&self, point: Point) -> Option<LayerId> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.rect.contains(point))
            .map(Layer::id)
    }

    fn count_of(&self, kind: LayerKind) -> usize {
        self.layers.iter().filter(|layer| layer.kind() == kind).count()
    }

    fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id == id)
    }

    fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }
}
