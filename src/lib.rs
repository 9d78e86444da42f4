// SPDX-License-Identifier: MPL-2.0
//! `iced_collage` is a photo collage editor built with the Iced GUI framework.
//!
//! Images are imported onto a white frame, placed on a shared surface and
//! captioned from their EXIF data; layers can then be dragged, resized from
//! their corners and annotated with free text.
//!
//! - [`domain`]: layers, gestures, guides and placement rules (no I/O)
//! - [`application`]: ports and the ingest pipeline
//! - [`infrastructure`]: `image` and `kamadak-exif` adapters
//! - [`app`]: the Iced application, configuration and paths
//! - [`ui`]: the collage screen and design system
//! - [`i18n`]: Fluent localization

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
