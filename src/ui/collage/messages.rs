// SPDX-License-Identifier: MPL-2.0
//! Collage editor message/event types.

use crate::domain::collage::LayerId;
use iced::widget::text_editor;
use iced::{Point, Rectangle};

/// Toolbar buttons.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    OpenImage,
    /// Adds a text layer showing the given placeholder.
    AddText(String),
    CopyDataUrl,
    ToggleLockAspect,
    ToggleGuides,
}

/// Pointer input from the collage canvas, in container-local coordinates.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    /// Cursor left the canvas area
    PointerLeft,
    /// The canvas was laid out with new bounds (window resize).
    Resized(Rectangle),
}

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Canvas(CanvasMessage),
    /// A row of the layer list was clicked.
    LayerSelected(LayerId),
    TextEdited(text_editor::Action),
}

/// Requests the editor cannot fulfil itself and hands to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenImageRequested,
    CopyToClipboard(String),
    /// Copy was requested before any image was loaded.
    NothingToCopy,
    /// A toggle changed; the app persists it.
    SettingsChanged {
        lock_aspect_ratio: bool,
        show_snap_guides: bool,
    },
}
