// SPDX-License-Identifier: MPL-2.0
//! Toast stack: at most three on screen, the rest wait their turn.

use super::notification::{Notification, NotificationId, Position, Severity};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// Close button on a toast.
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, newest first.
    visible: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
    position: Position,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_position(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Shows the toast right away, or parks it until a slot frees up.
    pub fn push(&mut self, notification: Notification) {
        let key = notification.message_key();
        match notification.severity() {
            Severity::Warning => tracing::warn!(key, "notification"),
            Severity::Error => tracing::error!(key, "notification"),
            Severity::Success | Severity::Info => tracing::debug!(key, "notification"),
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    /// Returns `false` when no toast has this id.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.fill_free_slots();
            true
        } else if let Some(pos) = self.waiting.iter().position(|n| n.id() == id) {
            self.waiting.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drops the on-screen toasts that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() != before {
            self.fill_free_slots();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Keeps the tick subscription alive while anything is shown or waiting.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.waiting.is_empty()
    }

    fn fill_free_slots(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.waiting.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn keys(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message_key).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
        assert_eq!(manager.position(), Position::TopRight);
        assert_eq!(
            Manager::with_position(Position::BottomLeft).position(),
            Position::BottomLeft
        );
    }

    #[test]
    fn fourth_toast_waits() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::success(format!("bin-{i}")));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert_eq!(manager.waiting.len(), 1);
        assert_eq!(keys(&manager), vec!["bin-2", "bin-1", "bin-0"]);
    }

    #[test]
    fn dismiss_shows_the_waiting_toast() {
        let mut manager = Manager::new();
        let first = Notification::success("bin-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::success(format!("bin-{i}")));
        }

        manager.handle_message(&Message::Dismiss(first_id));

        assert!(manager.waiting.is_empty());
        assert_eq!(keys(&manager), vec!["bin-2", "bin-1", "bin-3"]);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        manager.push(Notification::success("kept"));
        let stranger = Notification::success("never-pushed").id();

        assert!(!manager.dismiss(stranger));
        assert_eq!(keys(&manager), vec!["kept"]);
    }

    #[test]
    fn tick_drops_expired_and_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-bin-added"));
        manager.push(Notification::error("notification-print-error"));

        manager.tick(Instant::now());
        assert_eq!(manager.visible().count(), 2);

        manager.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(keys(&manager), vec!["notification-print-error"]);
    }

    #[test]
    fn tick_promotes_waiting_toasts() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("bin-{i}")));
        }
        manager.push(Notification::error("notification-print-error"));

        manager.tick(Instant::now() + Duration::from_secs(10));

        assert_eq!(keys(&manager), vec!["notification-print-error"]);
        assert!(manager.has_notifications());
    }
}
