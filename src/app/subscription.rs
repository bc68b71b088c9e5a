// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes the native events the app cares about (Escape) to messages and
//! drives notification auto-dismiss with a periodic tick.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between ticks while notifications are on screen.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for Escape so an open dialog can be dismissed from the keyboard.
///
/// Escape is forwarded even when a widget captured it: the text input
/// captures every key while focused, and the dialog must still close.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Ticks only while there is something to auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
