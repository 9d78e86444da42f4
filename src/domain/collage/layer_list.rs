// SPDX-License-Identifier: MPL-2.0
//! Newest-first index of the registry, shown as the layer panel.

use super::layer::{Layer, LayerId, LayerKind, LayerName};
use super::registry::LayerRegistry;

/// One row of the layer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerListEntry {
    pub id: LayerId,
    pub name: LayerName,
    pub kind: LayerKind,
    pub active: bool,
}

impl From<&Layer> for LayerListEntry {
    fn from(layer: &Layer) -> Self {
        Self {
            id: layer.id(),
            name: layer.name(),
            kind: layer.kind(),
            active: layer.is_active(),
        }
    }
}

/// Snapshot of the registry for display.
///
/// Rebuilt from scratch by [`sync`](Self::sync); it never diverges from the
/// registry it was last synced with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerListView {
    entries: Vec<LayerListEntry>,
}

impl LayerListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the entries, newest layer first.
    pub fn sync(&mut self, registry: &LayerRegistry) {
        self.entries.clear();
        self.entries.extend(registry.iter().rev().map(LayerListEntry::from));
    }

    #[must_use]
    pub fn entries(&self) -> &[LayerListEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
