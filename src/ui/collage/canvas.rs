// SPDX-License-Identifier: MPL-2.0
//! Collage surface: draws the layers and turns mouse input into
//! [`CanvasMessage`]s.

use super::{CanvasMessage, Message, State, ViewContext};
use crate::domain::collage::{
    Affordance, EditorSession, GestureState, ImageKey, LayerContent, ResizeHandle, TextMetrics,
};
use crate::domain::geometry::{Point, Rect};
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::theme;
use iced::widget::canvas::{self, Frame, Path, Stroke, Text};
use iced::widget::{container, image, Canvas};
use iced::{mouse, Element, Length};
use std::collections::HashMap;

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let program = CollageCanvas {
        session: &state.session,
        images: &state.images,
        show_guides: state.show_guides,
        drop_hint: ctx.i18n.tr("canvas-drop-hint"),
    };

    container(Canvas::new(program).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::canvas_style(theme::canvas_surface_color()))
        .into()
}

/// Canvas program drawing the session's layers, guides and handles.
struct CollageCanvas<'a> {
    session: &'a EditorSession,
    images: &'a HashMap<ImageKey, image::Handle>,
    show_guides: bool,
    drop_hint: String,
}

/// Bounds the session was last told about.
#[derive(Default)]
struct CanvasState {
    bounds: Option<iced::Rectangle>,
}

impl canvas::Program<Message> for CollageCanvas<'_> {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let gesture_active = !matches!(self.session.gesture(), GestureState::Idle);

        match event {
            iced::Event::Window(_) if state.bounds != Some(bounds) => {
                state.bounds = Some(bounds);
                return Some(Action::publish(Message::Canvas(CanvasMessage::Resized(bounds))));
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if gesture_active => {
                return Some(Action::publish(Message::Canvas(CanvasMessage::PointerLeft)).and_capture());
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    return Some(
                        Action::publish(Message::Canvas(CanvasMessage::PointerPressed(position)))
                            .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if gesture_active => {
                // Leaving the surface mid-gesture ends it.
                let message = match cursor.position_in(bounds) {
                    Some(position) => CanvasMessage::PointerMoved(position),
                    None => CanvasMessage::PointerLeft,
                };
                return Some(Action::publish(Message::Canvas(message)).and_capture());
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if gesture_active => {
                return Some(Action::publish(Message::Canvas(CanvasMessage::PointerReleased)).and_capture());
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let registry = self.session.registry();

        if registry.is_empty() {
            frame.fill_text(Text {
                content: self.drop_hint.clone(),
                position: iced::Point::new(spacing::MD, spacing::MD),
                color: theme::drop_hint_color(),
                size: typography::BODY.into(),
                ..Text::default()
            });
        }

        // Creation order: later layers paint on top.
        for layer in registry.iter() {
            let rect = layer.rect();
            match layer.content() {
                LayerContent::Image(key) => {
                    if let Some(handle) = self.images.get(key) {
                        frame.draw_image(to_rectangle(rect), canvas::Image::new(handle.clone()));
                    }
                }
                LayerContent::Text { text, .. } => {
                    draw_text(&mut frame, rect, text, self.session.text_metrics());
                    if !layer.is_active() {
                        frame.stroke(
                            &rect_path(rect),
                            Stroke::default()
                                .with_width(border::WIDTH_SM)
                                .with_color(theme::text_layer_outline_color()),
                        );
                    }
                }
            }
        }

        if self.show_guides {
            if let Some(center) = self.session.guides().center() {
                let guide = Stroke::default()
                    .with_width(border::WIDTH_SM)
                    .with_color(theme::guide_color());
                frame.stroke(
                    &Path::line(
                        iced::Point::new(0.0, center.y),
                        iced::Point::new(bounds.width, center.y),
                    ),
                    guide,
                );
                frame.stroke(
                    &Path::line(
                        iced::Point::new(center.x, 0.0),
                        iced::Point::new(center.x, bounds.height),
                    ),
                    guide,
                );
            }
        }

        if let Some(active) = registry.active() {
            let rect = active.rect();
            frame.stroke(
                &rect_path(rect),
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(theme::selection_border_color()),
            );

            let handle_size = self.session.handle_size();
            for handle in ResizeHandle::ALL {
                let area = handle.hit_area(rect, handle_size);
                let path = rect_path(area);
                frame.fill(&path, theme::handle_color());
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_width(border::WIDTH_SM)
                        .with_color(theme::handle_border_color()),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let hover = cursor
            .position_in(bounds)
            .map(|position| Point::new(position.x, position.y));
        match self.session.affordance(hover) {
            Affordance::Default => mouse::Interaction::default(),
            Affordance::Grab => mouse::Interaction::Grab,
            Affordance::Grabbing => mouse::Interaction::Grabbing,
            Affordance::Resize(handle) if handle.is_main_diagonal() => {
                mouse::Interaction::ResizingDiagonallyDown
            }
            Affordance::Resize(_) => mouse::Interaction::ResizingDiagonallyUp,
        }
    }
}

/// Draws `content` line by line with the metrics its box was sized from.
fn draw_text(frame: &mut Frame, rect: Rect, content: &str, metrics: &TextMetrics) {
    let line_height = metrics.font_size * metrics.line_height;
    for (index, line) in content.lines().enumerate() {
        frame.fill_text(Text {
            content: line.to_owned(),
            position: iced::Point::new(
                rect.x() + metrics.padding,
                rect.y() + metrics.padding + index as f32 * line_height,
            ),
            color: theme::text_layer_color(),
            size: metrics.font_size.into(),
            shaping: iced::widget::text::Shaping::Advanced,
            ..Text::default()
        });
    }
}

fn rect_path(rect: Rect) -> Path {
    Path::rectangle(
        iced::Point::new(rect.x(), rect.y()),
        iced::Size::new(rect.width(), rect.height()),
    )
}

fn to_rectangle(rect: Rect) -> iced::Rectangle {
    iced::Rectangle::new(
        iced::Point::new(rect.x(), rect.y()),
        iced::Size::new(rect.width(), rect.height()),
    )
}
