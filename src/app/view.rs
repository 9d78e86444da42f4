// SPDX-License-Identifier: MPL-2.0
//! Root view: the collage screen over the workspace background.

use super::{App, Message};
use crate::ui::collage::ViewContext;
use crate::ui::theme;
use iced::widget::container;
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let ctx = ViewContext {
        i18n: &app.i18n,
        status: app.status.as_deref(),
    };

    container(app.collage.view(ctx).map(Message::Collage))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|current: &iced::Theme| container::Style {
            background: Some(iced::Background::Color(theme::workspace_background(current))),
            ..Default::default()
        })
        .into()
}
