// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::port::DecodedImage;
use crate::domain::collage::GestureState;
use iced::widget::text_editor::{Action, Edit};
use std::sync::Arc;

fn prepared(width: u32, height: u32, data_url: Option<&str>) -> PreparedImage {
    PreparedImage {
        display: DecodedImage::new(width, height, vec![255; (width * height * 4) as usize])
            .expect("valid image"),
        data_url: data_url.map(str::to_owned),
        source: Arc::new(Vec::new()),
    }
}

fn add_text(state: &mut State, text: &str) -> LayerId {
    state.update(Message::Toolbar(ToolbarMessage::AddText(text.into())));
    state.session().registry().active_id().expect("text layer active")
}

#[test]
fn new_state_is_empty_and_idle() {
    let state = State::default();
    assert!(state.session().registry().is_empty());
    assert_eq!(state.session().gesture(), GestureState::Idle);
    assert!(state.data_url().is_none());
    assert!(state.show_guides());
}

#[test]
fn add_text_places_layer_at_default_origin_and_binds_editor() {
    let mut state = State::default();
    let id = add_text(&mut state, "Enter text");

    let layer = state.session().registry().layer(id).expect("layer");
    assert_eq!(layer.position(), Point::new(100.0, 100.0));
    assert_eq!(layer.text(), Some("Enter text"));
    assert_eq!(state.editing, Some(id));
    assert_eq!(state.editor.text().trim_end(), "Enter text");
}

#[test]
fn typing_updates_active_text_layer() {
    let mut state = State::default();
    let id = add_text(&mut state, "");

    state.update(Message::TextEdited(Action::Edit(Edit::Insert('a'))));
    state.update(Message::TextEdited(Action::Edit(Edit::Insert('b'))));

    let text = state.session().registry().layer(id).and_then(Layer::text).expect("text");
    assert_eq!(text.trim_end(), "ab");
}

#[test]
fn locked_text_layer_ignores_edits() {
    let mut state = State::default();
    let first = add_text(&mut state, "first");
    add_text(&mut state, "second");

    state.update(Message::LayerSelected(first));
    assert_eq!(state.editing, Some(first));
    state.update(Message::TextEdited(Action::Edit(Edit::Insert('x'))));

    let layer = state.session().registry().layer(first).expect("layer");
    assert!(!layer.is_editable());
    assert_eq!(layer.text(), Some("first"));
}

#[test]
fn selecting_an_image_unbinds_the_editor() {
    let mut state = State::default();
    let image = state
        .insert_image(prepared(100, 50, None), &IngestOptions::default())
        .expect("placed");
    add_text(&mut state, "t");

    state.update(Message::LayerSelected(image));
    assert_eq!(state.editing, None);
}

#[test]
fn inserted_image_is_fitted_and_centered() {
    let mut state = State::default();
    let id = state
        .insert_image(prepared(100, 50, Some("data:image/jpeg;base64,AAAA")), &IngestOptions::default())
        .expect("placed");

    let rect = state.session().registry().layer(id).expect("layer").rect();
    assert_eq!(rect, Rect::new(80.0, 140.0, 640.0, 320.0));
    assert_eq!(state.images.len(), 1);
    assert_eq!(state.data_url(), Some("data:image/jpeg;base64,AAAA"));
}

#[test]
fn copy_requires_a_data_url() {
    let mut state = State::default();
    assert_eq!(
        state.update(Message::Toolbar(ToolbarMessage::CopyDataUrl)),
        Event::NothingToCopy
    );

    state.insert_image(prepared(10, 10, Some("data:x")), &IngestOptions::default());
    assert_eq!(
        state.update(Message::Toolbar(ToolbarMessage::CopyDataUrl)),
        Event::CopyToClipboard("data:x".into())
    );
}

#[test]
fn caption_lands_below_image_and_becomes_active() {
    let mut state = State::default();
    let image = state
        .insert_image(prepared(100, 50, None), &IngestOptions::default())
        .expect("placed");
    let tags = ExifTags {
        make: Some("Nikon".into()),
        model: Some("D90".into()),
        ..ExifTags::default()
    };

    let caption = state
        .insert_caption(image, &tags, &CaptionLabels::default(), &IngestOptions::default())
        .expect("caption");

    let layer = state.session().registry().layer(caption).expect("layer");
    assert_eq!(layer.text(), Some("カメラ: Nikon D90"));
    assert_eq!(layer.position(), Point::new(80.0, 460.0));
    assert_eq!(state.editing, Some(caption));
}

#[test]
fn canvas_messages_drive_a_drag() {
    let mut state = State::default();
    let id = state
        .insert_image(prepared(100, 50, None), &IngestOptions::default())
        .expect("placed");

    state.update(Message::Canvas(CanvasMessage::PointerPressed(iced::Point::new(100.0, 150.0))));
    state.update(Message::Canvas(CanvasMessage::PointerMoved(iced::Point::new(110.0, 170.0))));
    state.update(Message::Canvas(CanvasMessage::PointerReleased));

    let rect = state.session().registry().layer(id).expect("layer").rect();
    assert_eq!(rect.origin, Point::new(90.0, 160.0));
    assert_eq!(state.session().gesture(), GestureState::Idle);
}

#[test]
fn pointer_left_and_cancel_end_gestures() {
    let mut state = State::default();
    state.insert_image(prepared(100, 50, None), &IngestOptions::default());

    state.update(Message::Canvas(CanvasMessage::PointerPressed(iced::Point::new(100.0, 150.0))));
    state.update(Message::Canvas(CanvasMessage::PointerLeft));
    assert_eq!(state.session().gesture(), GestureState::Idle);

    state.update(Message::Canvas(CanvasMessage::PointerPressed(iced::Point::new(100.0, 150.0))));
    state.cancel_gesture();
    assert_eq!(state.session().gesture(), GestureState::Idle);
}

#[test]
fn toggles_report_settings() {
    let mut state = State::default();

    let event = state.update(Message::Toolbar(ToolbarMessage::ToggleLockAspect));
    assert_eq!(
        event,
        Event::SettingsChanged {
            lock_aspect_ratio: true,
            show_snap_guides: true,
        }
    );
    assert!(state.constraints().lock_aspect_ratio);

    let event = state.update(Message::Toolbar(ToolbarMessage::ToggleGuides));
    assert_eq!(
        event,
        Event::SettingsChanged {
            lock_aspect_ratio: true,
            show_snap_guides: false,
        }
    );
}

#[test]
fn resized_canvas_updates_container() {
    let mut state = State::default();
    state.update(Message::Canvas(CanvasMessage::Resized(iced::Rectangle::new(
        iced::Point::new(230.0, 50.0),
        iced::Size::new(1000.0, 700.0),
    ))));
    assert_eq!(state.container_size(), Size::new(1000.0, 700.0));

    let id = state
        .insert_image(prepared(100, 50, None), &IngestOptions::default())
        .expect("placed");
    let rect = state.session().registry().layer(id).expect("layer").rect();
    assert_eq!(rect.width(), 800.0);
    assert_eq!(rect.height(), 400.0);
}
