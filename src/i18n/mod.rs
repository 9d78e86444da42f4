// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. Bundles are embedded
//! from `assets/i18n/` and can be overridden from a directory at runtime
//! (`--i18n-dir`).
//!
//! # Locale Resolution
//!
//! CLI `--lang`, then `[general] language` from the config, then the OS
//! locale, then `en-US`.

pub mod fluent;
