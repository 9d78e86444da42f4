// SPDX-License-Identifier: MPL-2.0
//! Layer records placed on the collage surface.
//!
//! A layer is plain data: what it shows, where it is, how large it is and
//! whether it is the active one. Rendering is a separate projection done by
//! the presentation layer.

use crate::domain::geometry::{Point, Rect};
use std::fmt;

/// Stable identifier of a layer inside a [`LayerRegistry`](super::LayerRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    #[must_use]
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Opaque key of the pixels backing an image layer.
///
/// The presentation layer owns the actual image handles and looks them up by
/// this key; the domain never touches pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageKey(u64);

impl ImageKey {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// The two kinds of layer the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Image,
    Text,
}

/// Human-readable layer name, localized at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerName {
    /// Every image layer is simply called "Image".
    Image,
    /// Text layers are numbered from 1 in creation order.
    Text(usize),
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerName::Image => write!(f, "Image"),
            LayerName::Text(index) => write!(f, "Text {index}"),
        }
    }
}

/// What a layer displays.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerContent {
    Image(ImageKey),
    Text {
        text: String,
        /// Whether the text can still be edited. Cleared for good once the
        /// layer loses activation to another layer.
        editable: bool,
    },
}

impl LayerContent {
    #[must_use]
    pub fn kind(&self) -> LayerKind {
        match self {
            LayerContent::Image(_) => LayerKind::Image,
            LayerContent::Text { .. } => LayerKind::Text,
        }
    }
}

/// A layer that has not been registered yet.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDraft {
    pub content: LayerContent,
    pub rect: Rect,
}

impl LayerDraft {
    /// Draft for an image layer occupying `rect`.
    #[must_use]
    pub fn image(key: ImageKey, rect: Rect) -> Self {
        Self {
            content: LayerContent::Image(key),
            rect,
        }
    }

    /// Draft for a freshly created (and therefore editable) text layer.
    #[must_use]
    pub fn text(text: impl Into<String>, rect: Rect) -> Self {
        Self {
            content: LayerContent::Text {
                text: text.into(),
                editable: true,
            },
            rect,
        }
    }
}

/// A layer owned by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub(crate) id: LayerId,
    pub(crate) name: LayerName,
    pub(crate) content: LayerContent,
    pub(crate) rect: Rect,
    pub(crate) active: bool,
    /// Set once the user resized the layer; text layers stop auto-sizing then.
    pub(crate) sized_by_user: bool,
}

impl Layer {
    #[must_use]
    pub fn id(&self) -> LayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> LayerName {
        self.name
    }

    #[must_use]
    pub fn kind(&self) -> LayerKind {
        self.content.kind()
    }

    #[must_use]
    pub fn content(&self) -> &LayerContent {
        &self.content
    }

    /// Position and size relative to the container origin.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.rect.origin
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_sized_by_user(&self) -> bool {
        self.sized_by_user
    }

    /// Text of a text layer, `None` for images.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            LayerContent::Text { text, .. } => Some(text),
            LayerContent::Image(_) => None,
        }
    }

    /// Returns `true` only for text layers that still accept edits.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self.content, LayerContent::Text { editable: true, .. })
    }

    #[must_use]
    pub fn image_key(&self) -> Option<ImageKey> {
        match self.content {
            LayerContent::Image(key) => Some(key),
            LayerContent::Text { .. } => None,
        }
    }

    pub(crate) fn lock_text(&mut self) {
        if let LayerContent::Text { editable, .. } = &mut self.content {
            *editable = false;
        }
    }
}
