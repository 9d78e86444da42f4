// SPDX-License-Identifier: MPL-2.0
//! Collage editor screen.
//!
//! This module follows the "state down, messages up" pattern: the widgets emit
//! [`Message`]s, [`State::update`] applies them to the [`EditorSession`] and
//! returns an [`Event`] for anything the app has to do (file dialogs,
//! clipboard, persisting toggles).

mod canvas;
mod layer_panel;
mod messages;
mod text_panel;
mod toolbar;

pub use messages::{CanvasMessage, Event, Message, ToolbarMessage};

use crate::application::ingest::{self, IngestOptions, PreparedImage};
use crate::domain::collage::placement;
use crate::domain::collage::{
    EditorSession, ImageKey, Layer, LayerId, LayerKind, PointerDown, ResizeConstraints,
    SessionSettings,
};
use crate::domain::geometry::{Point, Rect, Size};
use crate::domain::metadata::{CaptionLabels, ExifTags};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{image, text_editor, Column, Row};
use iced::{Element, Length};
use std::collections::HashMap;

/// Read-only data the views need from the app.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Transient status line (copy confirmation, load error).
    pub status: Option<&'a str>,
}

/// Local UI state for the collage screen.
pub struct State {
    session: EditorSession,
    /// Pixels of every image layer, looked up by key at draw time.
    images: HashMap<ImageKey, image::Handle>,
    next_image_key: u64,
    /// Data URL of the most recently loaded image.
    data_url: Option<String>,
    show_guides: bool,
    /// Text layer the editor content is bound to.
    editing: Option<LayerId>,
    editor: text_editor::Content,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("layers", &self.session.registry().len())
            .field("active", &self.session.registry().active_id())
            .field("gesture", &self.session.gesture())
            .field("images", &self.images.len())
            .field("show_guides", &self.show_guides)
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(SessionSettings::default(), true)
    }
}

impl State {
    #[must_use]
    pub fn new(settings: SessionSettings, show_guides: bool) -> Self {
        Self {
            session: EditorSession::new(settings),
            images: HashMap::new(),
            next_image_key: 0,
            data_url: None,
            show_guides,
            editing: None,
            editor: text_editor::Content::new(),
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        let event = match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::Canvas(msg) => {
                self.handle_canvas_message(msg);
                Event::None
            }
            Message::LayerSelected(id) => {
                self.session.activate(id);
                Event::None
            }
            Message::TextEdited(action) => {
                self.handle_text_edit(action);
                Event::None
            }
        };
        self.sync_editor();
        event
    }

    fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::OpenImage => Event::OpenImageRequested,
            ToolbarMessage::AddText(placeholder) => {
                let id = self.session.add_text(placeholder, placement::default_text_origin());
                tracing::debug!(layer = id.value(), "text layer added");
                Event::None
            }
            ToolbarMessage::CopyDataUrl => match &self.data_url {
                Some(url) => Event::CopyToClipboard(url.clone()),
                None => Event::NothingToCopy,
            },
            ToolbarMessage::ToggleLockAspect => {
                let constraints = ResizeConstraints {
                    lock_aspect_ratio: !self.constraints().lock_aspect_ratio,
                    ..*self.constraints()
                };
                self.session.set_constraints(constraints);
                self.settings_changed()
            }
            ToolbarMessage::ToggleGuides => {
                self.show_guides = !self.show_guides;
                self.settings_changed()
            }
        }
    }

    fn handle_canvas_message(&mut self, message: CanvasMessage) {
        match message {
            CanvasMessage::PointerPressed(position) => {
                match self.session.pointer_down(to_domain(position)) {
                    PointerDown::Drag(id) => tracing::debug!(layer = id.value(), "drag started"),
                    PointerDown::Resize(id, handle) => {
                        tracing::debug!(layer = id.value(), ?handle, "resize started");
                    }
                    PointerDown::Missed | PointerDown::Ignored => {}
                }
            }
            CanvasMessage::PointerMoved(position) => {
                self.session.pointer_move(to_domain(position));
            }
            CanvasMessage::PointerReleased => {
                if self.session.pointer_up() {
                    tracing::debug!("gesture ended");
                }
            }
            CanvasMessage::PointerLeft => {
                if self.session.pointer_leave() {
                    tracing::debug!("gesture ended: pointer left the canvas");
                }
            }
            CanvasMessage::Resized(bounds) => {
                self.session.set_container(Rect::new(
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                ));
            }
        }
    }

    fn handle_text_edit(&mut self, action: text_editor::Action) {
        let Some(id) = self.editing else {
            return;
        };
        let is_edit = action.is_edit();
        if is_edit && !self.layer(id).is_some_and(Layer::is_editable) {
            return;
        }
        self.editor.perform(action);
        if is_edit {
            self.session.set_text(id, self.editor.text());
        }
    }

    /// Binds the text editor to the active text layer, if any.
    fn sync_editor(&mut self) {
        let target = self
            .session
            .registry()
            .active()
            .filter(|layer| layer.kind() == LayerKind::Text);
        let target_id = target.map(Layer::id);
        if target_id == self.editing {
            return;
        }
        self.editor = text_editor::Content::with_text(target.and_then(Layer::text).unwrap_or_default());
        self.editing = target_id;
    }

    fn settings_changed(&self) -> Event {
        Event::SettingsChanged {
            lock_aspect_ratio: self.constraints().lock_aspect_ratio,
            show_snap_guides: self.show_guides,
        }
    }

    // -------------------------------------------------------------------------
    // Ingest hand-off
    // -------------------------------------------------------------------------

    /// Stores the decoded pixels and places the image layer.
    pub fn insert_image(&mut self, prepared: PreparedImage, options: &IngestOptions) -> Option<LayerId> {
        self.next_image_key += 1;
        let key = ImageKey::new(self.next_image_key);
        let size = prepared.size();
        let handle = image::Handle::from_rgba(
            prepared.display.width(),
            prepared.display.height(),
            prepared.display.rgba().to_vec(),
        );
        self.images.insert(key, handle);
        if prepared.data_url.is_some() {
            self.data_url = prepared.data_url;
        }

        let id = ingest::place_image(&mut self.session, key, size, options);
        if id.is_none() {
            self.images.remove(&key);
        }
        self.sync_editor();
        id
    }

    /// Adds the EXIF caption below `image_layer`.
    pub fn insert_caption(
        &mut self,
        image_layer: LayerId,
        tags: &ExifTags,
        labels: &CaptionLabels,
        options: &IngestOptions,
    ) -> Option<LayerId> {
        let id = ingest::attach_caption(&mut self.session, image_layer, tags, labels, options);
        self.sync_editor();
        id
    }

    /// Ends any gesture in progress (window lost focus).
    pub fn cancel_gesture(&mut self) {
        if self.session.cancel_gesture() {
            tracing::debug!("gesture cancelled");
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    #[must_use]
    pub fn constraints(&self) -> &ResizeConstraints {
        self.session.constraints()
    }

    #[must_use]
    pub fn show_guides(&self) -> bool {
        self.show_guides
    }

    #[must_use]
    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    #[must_use]
    pub fn container_size(&self) -> Size {
        self.session.container().size
    }

    fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.session.registry().layer(id)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let main = Column::new()
            .push(toolbar::view(self, &ctx))
            .push(canvas::view(self, &ctx))
            .push(text_panel::view(self, &ctx))
            .spacing(spacing::XS)
            .padding(spacing::XS)
            .width(Length::Fill)
            .height(Length::Fill);

        Row::new()
            .push(layer_panel::view(self, &ctx))
            .push(main)
            .into()
    }
}

fn to_domain(point: iced::Point) -> Point {
    Point::new(point.x, point.y)
}

#[cfg(test)]
mod tests;
