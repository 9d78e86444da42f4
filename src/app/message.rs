// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::ingest::PreparedImage;
use crate::domain::collage::LayerId;
use crate::domain::metadata::ExifTags;
use crate::error::Error;
use crate::ui::collage;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Collage(collage::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Decode stage finished for the file at `path`.
    ImageLoaded {
        path: PathBuf,
        result: Result<PreparedImage, Error>,
    },
    /// EXIF stage finished for the image placed as `image_layer`.
    ExifExtracted {
        image_layer: LayerId,
        tags: ExifTags,
    },
    /// The window lost focus; any gesture in progress ends.
    WindowUnfocused,
}

/// Runtime flags passed from `main` to the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override provided on the command line.
    pub lang: Option<String>,
    /// Image to open on startup.
    pub file_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Optional configuration directory (overrides the platform default).
    pub config_dir: Option<String>,
}
