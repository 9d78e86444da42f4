// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input reaches the collage through its canvas widget; only
//! window-level events are routed here.

use super::Message;
use iced::{event, window, Subscription};

/// Routes dropped files and focus loss to the app.
///
/// Losing focus ends any gesture in progress: the button release would be
/// delivered to another window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Window(window::Event::Unfocused) => Some(Message::WindowUnfocused),
        _ => None,
    })
}
