// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and canvas styles for the collage editor.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_100, GRAY_900, WHITE},
};
use iced::widget::container;
use iced::{Color, Theme};

/// Background of the collage surface.
pub fn canvas_surface_color() -> Color {
    WHITE
}

/// Background of the area surrounding the collage surface.
pub fn workspace_background(theme: &Theme) -> Color {
    if matches!(theme, Theme::Light) {
        GRAY_100
    } else {
        GRAY_900
    }
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for success text.
pub fn success_text_color() -> Color {
    palette::SUCCESS_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Style for the container wrapping the collage canvas.
pub fn canvas_style(background_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background_color)),
        border: iced::Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

// ============================================================================
// Layer Overlay Styles
// ============================================================================

/// Outline drawn around the active layer.
pub fn selection_border_color() -> Color {
    palette::PRIMARY_500
}

/// Outline drawn around inactive text layers so empty text stays visible.
pub fn text_layer_outline_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..BLACK
    }
}

/// Color of text layer content.
pub fn text_layer_color() -> Color {
    GRAY_900
}

/// Fill color for corner resize handles.
pub fn handle_color() -> Color {
    WHITE
}

/// Border color for corner resize handles.
pub fn handle_border_color() -> Color {
    palette::PRIMARY_600
}

/// Color of the center snap guides.
pub fn guide_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::GUIDE_500
    }
}

/// Placeholder hint on an empty canvas.
pub fn drop_hint_color() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::GRAY_400
    }
}
