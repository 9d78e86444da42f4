// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Image ingestion runs in two tasks: read + decode + frame, then EXIF
//! extraction on the original bytes. Each stage hands its result back as a
//! message so all session mutation stays on the update loop.

use super::{config, App, Message};
use crate::application::ingest::{self, IngestOptions, PreparedImage};
use crate::application::port::{ExifReader, ImageDecoder};
use crate::domain::collage::LayerId;
use crate::domain::metadata::{CaptionLabels, ExifTags};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::infrastructure::image_decoder::{is_supported_path, SUPPORTED_EXTENSIONS};
use crate::ui::collage::{self, Event};
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Applies a collage message and performs whatever the resulting event asks for.
pub fn handle_collage_message(app: &mut App, message: collage::Message) -> Task<Message> {
    match app.collage.update(message) {
        Event::None => Task::none(),
        Event::OpenImageRequested => open_file_dialog(),
        Event::CopyToClipboard(url) => {
            app.status = Some(app.i18n.tr("status-copied"));
            iced::clipboard::write(url)
        }
        Event::NothingToCopy => {
            app.status = Some(app.i18n.tr("status-no-data-url"));
            Task::none()
        }
        Event::SettingsChanged {
            lock_aspect_ratio,
            show_snap_guides,
        } => {
            app.config.editor.lock_aspect_ratio = Some(lock_aspect_ratio);
            app.config.editor.show_snap_guides = Some(show_snap_guides);
            if let Err(err) = config::save(&app.config) {
                tracing::warn!(%err, "could not persist settings");
                app.status = Some(app.i18n.tr("notification-config-save-error"));
            }
            Task::none()
        }
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", SUPPORTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles a path chosen in the dialog or dropped on the window.
///
/// A cancelled dialog is a no-op.
pub fn handle_file_selected(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    if !is_supported_path(&path) {
        tracing::warn!(path = %path.display(), "ignoring unsupported file");
        app.status = Some(app.i18n.tr("error-load-image-unsupported"));
        return Task::none();
    }
    load_image(app, path)
}

/// Starts the decode stage for `path`.
pub fn load_image(app: &mut App, path: PathBuf) -> Task<Message> {
    tracing::info!(path = %path.display(), "loading image");
    let decoder = Arc::clone(&app.decoder);
    let options = app.config.ingest.options();

    Task::perform(
        async move {
            let result = read_and_prepare(decoder, &path, options).await;
            (path, result)
        },
        |(path, result)| Message::ImageLoaded { path, result },
    )
}

async fn read_and_prepare(
    decoder: Arc<dyn ImageDecoder>,
    path: &Path,
    options: IngestOptions,
) -> Result<PreparedImage> {
    let bytes = tokio::fs::read(path).await?;
    let prepared = tokio::task::spawn_blocking(move || {
        ingest::prepare_image(decoder.as_ref(), bytes, &options)
    })
    .await
    .map_err(|err| Error::Io(err.to_string()))??;
    Ok(prepared)
}

/// Places a decoded image and starts the EXIF stage.
pub fn handle_image_loaded(
    app: &mut App,
    path: &Path,
    result: Result<PreparedImage>,
) -> Task<Message> {
    let prepared = match result {
        Ok(prepared) => prepared,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "image load failed");
            app.status = Some(app.i18n.tr(err.i18n_key()));
            return Task::none();
        }
    };

    let options = app.config.ingest.options();
    let source = Arc::clone(&prepared.source);
    let Some(image_layer) = app.collage.insert_image(prepared, &options) else {
        tracing::warn!(path = %path.display(), "image has no area to place");
        return Task::none();
    };
    app.status = None;

    if !options.exif_caption {
        return Task::none();
    }

    let reader = Arc::clone(&app.exif_reader);
    Task::perform(extract_tags(reader, source), move |tags| Message::ExifExtracted {
        image_layer,
        tags,
    })
}

async fn extract_tags(reader: Arc<dyn ExifReader>, source: Arc<Vec<u8>>) -> ExifTags {
    tokio::task::spawn_blocking(move || ingest::extract_tags(reader.as_ref(), &source))
        .await
        .unwrap_or_default()
}

/// Adds the caption layer once EXIF tags are known.
pub fn handle_exif_extracted(app: &mut App, image_layer: LayerId, tags: &ExifTags) {
    let labels = caption_labels(&app.i18n);
    let options = app.config.ingest.options();
    app.collage.insert_caption(image_layer, tags, &labels, &options);
}

/// Caption labels in the current UI language.
pub fn caption_labels(i18n: &I18n) -> CaptionLabels {
    CaptionLabels {
        camera: i18n.tr("caption-camera"),
        focal_length: i18n.tr("caption-focal-length"),
        aperture: i18n.tr("caption-aperture"),
        iso: i18n.tr("caption-iso"),
        shutter_speed: i18n.tr("caption-shutter-speed"),
    }
}
