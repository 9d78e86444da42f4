// SPDX-License-Identifier: MPL-2.0
//! Layer list sidebar. Newest layer first; clicking a row activates it.

use super::{Message, State, ViewContext};
use crate::domain::collage::{LayerListEntry, LayerName};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{styles, theme};
use iced::widget::{button, container, scrollable, Column, Text};
use iced::{Element, Length};

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let list = state.session.layer_list();

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("layers-title")).size(typography::TITLE_SM));

    if list.is_empty() {
        column = column.push(
            Text::new(ctx.i18n.tr("layers-empty"))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );
    }

    for entry in list.entries() {
        column = column.push(row(entry, ctx.i18n));
    }

    container(scrollable(column.padding(spacing::XS)))
        .width(Length::Fixed(sizing::LAYER_PANEL_WIDTH))
        .height(Length::Fill)
        .into()
}

fn row<'a>(entry: &LayerListEntry, i18n: &I18n) -> Element<'a, Message> {
    button(Text::new(layer_label(entry.name, i18n)).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::toggle(entry.active))
        .on_press(Message::LayerSelected(entry.id))
        .into()
}

/// Localized display name of a layer.
pub(super) fn layer_label(name: LayerName, i18n: &I18n) -> String {
    match name {
        LayerName::Image => i18n.tr("layer-name-image"),
        LayerName::Text(index) => i18n.tr_with_args("layer-name-text", &[("index", &index.to_string())]),
    }
}
