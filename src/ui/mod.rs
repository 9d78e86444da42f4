// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The collage screen follows the Elm-style "state down, messages up"
//! pattern: widgets emit messages, the screen state applies them to the
//! editor session and reports anything else to the app as events.
//!
//! - [`collage`] - Collage editor screen (canvas, layer list, toolbar, text editor)
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers

pub mod collage;
pub mod design_tokens;
pub mod styles;
pub mod theme;
