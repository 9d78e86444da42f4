// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the collage editor.
//!
//! The `App` struct wires together the collage screen, localization and
//! persisted preferences, and translates editor events into side effects
//! like file dialogs, clipboard writes, image loading or config persistence.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{ExifReader, ImageDecoder};
use crate::domain::collage::{SessionSettings, TextMetrics};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ImageRsDecoder, KamadakExifReader};
use crate::ui::collage;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    collage: collage::State,
    decoder: Arc<dyn ImageDecoder>,
    exif_reader: Arc<dyn ExifReader>,
    /// Transient status line shown in the toolbar.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("collage", &self.collage)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(I18n::default(), Config::default())
    }
}

impl App {
    fn with_config(i18n: I18n, config: Config) -> Self {
        let settings = SessionSettings {
            constraints: config.editor.resize_constraints(),
            text_metrics: TextMetrics::default(),
        };
        let collage = collage::State::new(settings, config.editor.show_snap_guides());
        Self {
            i18n,
            config,
            collage,
            decoder: Arc::new(ImageRsDecoder::new()),
            exif_reader: Arc::new(KamadakExifReader::new()),
            status: None,
        }
    }

    /// Initializes application state and optionally kicks off asynchronous image
    /// loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n_dir = flags.i18n_dir.as_deref().map(std::path::Path::new);
        let i18n = I18n::new(flags.lang.clone(), i18n_dir, &config);

        let mut app = Self::with_config(i18n, config);
        tracing::info!(locale = %app.i18n.current_locale(), "application started");

        if let Some(key) = config_warning {
            app.status = Some(app.i18n.tr(&key));
        }

        let task = match flags.file_path {
            Some(path) => update::load_image(&mut app, PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Collage(collage_message) => update::handle_collage_message(self, collage_message),
            Message::OpenFileDialogResult(path) => update::handle_file_selected(self, path),
            Message::FileDropped(path) => update::handle_file_selected(self, Some(path)),
            Message::ImageLoaded { path, result } => update::handle_image_loaded(self, &path, result),
            Message::ExifExtracted { image_layer, tags } => {
                update::handle_exif_extracted(self, image_layer, &tags);
                Task::none()
            }
            Message::WindowUnfocused => {
                self.collage.cancel_gesture();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests;
