// SPDX-License-Identifier: MPL-2.0
//! Top toolbar for the collage surface.

use super::{Message, State, ToolbarMessage, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{styles, theme};
use iced::widget::{button, container, Row, Space, Text};
use iced::{Alignment, Element, Length};

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let action = |label: String, message: ToolbarMessage| {
        button(Text::new(label).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::SM])
            .style(styles::unselected)
            .on_press(Message::Toolbar(message))
    };
    let toggle = |label: String, active: bool, message: ToolbarMessage| {
        button(Text::new(label).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::SM])
            .style(styles::toggle(active))
            .on_press(Message::Toolbar(message))
    };

    let copy = button(Text::new(i18n.tr("toolbar-copy-data-url")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .style(styles::unselected)
        .on_press_maybe(
            state
                .data_url()
                .map(|_| Message::Toolbar(ToolbarMessage::CopyDataUrl)),
        );

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(action(i18n.tr("toolbar-open-image"), ToolbarMessage::OpenImage))
        .push(action(
            i18n.tr("toolbar-add-text"),
            ToolbarMessage::AddText(i18n.tr("text-placeholder")),
        ))
        .push(copy)
        .push(toggle(
            i18n.tr("toolbar-lock-aspect"),
            state.constraints().lock_aspect_ratio,
            ToolbarMessage::ToggleLockAspect,
        ))
        .push(toggle(
            i18n.tr("toolbar-guides"),
            state.show_guides(),
            ToolbarMessage::ToggleGuides,
        ))
        .push(Space::new().width(Length::Fill));

    if let Some(status) = ctx.status {
        row = row.push(
            Text::new(status.to_owned())
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );
    }

    container(row).width(Length::Fill).into()
}
