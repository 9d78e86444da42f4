// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::ingest::PreparedImage;
use crate::application::port::{DecodeError, DecodedImage};
use crate::domain::collage::{GestureState, LayerKind};
use crate::domain::metadata::ExifTags;
use crate::error::Error;
use crate::ui::collage::{CanvasMessage, ToolbarMessage};
use std::path::Path;

fn japanese_app() -> App {
    let config = Config::default();
    let i18n = I18n::new(Some("ja".into()), None, &config);
    App::with_config(i18n, config)
}

fn english_app() -> App {
    let config = Config::default();
    let i18n = I18n::new(Some("en-US".into()), None, &config);
    App::with_config(i18n, config)
}

fn prepared(width: u32, height: u32) -> PreparedImage {
    PreparedImage {
        display: DecodedImage::new(width, height, vec![0; (width * height * 4) as usize])
            .expect("valid image"),
        data_url: Some("data:image/jpeg;base64,".into()),
        source: Arc::new(Vec::new()),
    }
}

fn nikon() -> ExifTags {
    ExifTags {
        make: Some("Nikon".into()),
        model: Some("D90".into()),
        ..ExifTags::default()
    }
}

#[test]
fn loaded_image_becomes_active_layer() {
    let mut app = english_app();
    let _ = update::handle_image_loaded(&mut app, Path::new("a.png"), Ok(prepared(100, 50)));

    let registry = app.collage.session().registry();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.active().map(|layer| layer.kind()), Some(LayerKind::Image));
    assert!(app.status.is_none());
}

#[test]
fn failed_load_reports_status_and_adds_nothing() {
    let mut app = english_app();
    let _ = update::handle_image_loaded(
        &mut app,
        Path::new("broken.png"),
        Err(Error::Decode(DecodeError::CorruptedData("truncated".into()))),
    );

    assert!(app.collage.session().registry().is_empty());
    assert_eq!(app.status.as_deref(), Some("The image could not be decoded"));
}

#[test]
fn japanese_ui_builds_japanese_caption() {
    let mut app = japanese_app();
    let _ = update::handle_image_loaded(&mut app, Path::new("a.jpg"), Ok(prepared(100, 50)));
    let image = app.collage.session().registry().active_id().expect("image layer");

    update::handle_exif_extracted(&mut app, image, &nikon());

    let caption = app.collage.session().registry().active().expect("caption layer");
    assert_eq!(caption.text(), Some("カメラ: Nikon D90"));
}

#[test]
fn english_ui_builds_english_caption() {
    let mut app = english_app();
    let _ = update::handle_image_loaded(&mut app, Path::new("a.jpg"), Ok(prepared(100, 50)));
    let image = app.collage.session().registry().active_id().expect("image layer");

    update::handle_exif_extracted(&mut app, image, &nikon());

    let caption = app.collage.session().registry().active().expect("caption layer");
    assert_eq!(caption.text(), Some("Camera: Nikon D90"));
}

#[test]
fn empty_exif_still_adds_a_caption_layer() {
    let mut app = english_app();
    let _ = update::handle_image_loaded(&mut app, Path::new("a.jpg"), Ok(prepared(100, 50)));
    let image = app.collage.session().registry().active_id().expect("image layer");

    update::handle_exif_extracted(&mut app, image, &ExifTags::default());

    let registry = app.collage.session().registry();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.active().and_then(|layer| layer.text()), Some(""));
}

#[test]
fn cancelled_dialog_is_a_no_op() {
    let mut app = english_app();
    let _ = app.update(Message::OpenFileDialogResult(None));
    assert!(app.collage.session().registry().is_empty());
    assert!(app.status.is_none());
}

#[test]
fn unsupported_drop_is_rejected() {
    let mut app = english_app();
    let _ = app.update(Message::FileDropped(PathBuf::from("notes.txt")));
    assert_eq!(app.status.as_deref(), Some("This image format is not supported"));
}

#[test]
fn copy_without_image_reports_status() {
    let mut app = english_app();
    let _ = app.update(Message::Collage(collage::Message::Toolbar(ToolbarMessage::CopyDataUrl)));
    assert_eq!(app.status.as_deref(), Some("No framed image to copy yet"));
}

#[test]
fn losing_focus_ends_the_gesture() {
    let mut app = english_app();
    let _ = update::handle_image_loaded(&mut app, Path::new("a.png"), Ok(prepared(100, 50)));
    let _ = app.update(Message::Collage(collage::Message::Canvas(CanvasMessage::PointerPressed(
        iced::Point::new(400.0, 300.0),
    ))));
    assert!(matches!(app.collage.session().gesture(), GestureState::Dragging { .. }));

    let _ = app.update(Message::WindowUnfocused);
    assert_eq!(app.collage.session().gesture(), GestureState::Idle);
}
