// SPDX-License-Identifier: MPL-2.0
//! Editor for the active text layer.

use super::{Message, State, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use iced::widget::{container, text_editor, Column, Text};
use iced::{Element, Length};

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let active = state
        .editing
        .and_then(|id| state.session.registry().layer(id));

    let Some(layer) = active else {
        return container(
            Text::new(i18n.tr("text-editor-hint"))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        )
        .height(Length::Fixed(sizing::TEXT_EDITOR_HEIGHT))
        .into();
    };

    let title = super::layer_panel::layer_label(layer.name(), i18n);
    let mut editor = text_editor(&state.editor)
        .placeholder(i18n.tr("text-placeholder"))
        .size(typography::BODY)
        .height(Length::Fill);
    let note = if layer.is_editable() {
        editor = editor.on_action(Message::TextEdited);
        i18n.tr("text-editor-title")
    } else {
        i18n.tr("text-editor-locked")
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(format!("{title} · {note}"))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        )
        .push(editor)
        .height(Length::Fixed(sizing::TEXT_EDITOR_HEIGHT))
        .into()
}
