// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum and
//! the on-screen `Position` of the toast stack.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::Deserialize;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    /// i18n key of the default toast title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Severity::Success => "notification-title-success",
            Severity::Info => "notification-title-info",
            Severity::Warning => "notification-title-warning",
            Severity::Error => "notification-title-error",
        }
    }
}

/// Screen corner where toasts stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Position {
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Position::TopRight | Position::TopLeft)
    }

    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Position::TopRight | Position::BottomRight)
    }
}

/// A toast waiting in the manager.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Fluent key of the body text.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// `message_key` is resolved by the toast at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Fluent argument for the body, e.g. `("bin", "BIN4111")`.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &'static str {
        self.severity.title_key()
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// True once the severity's display time has passed at `now`.
    /// Errors never expire.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success_duration = Severity::Success.auto_dismiss_duration().unwrap();
        let warning_duration = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning_duration > success_duration);
    }

    #[test]
    fn title_follows_severity() {
        assert_eq!(
            Notification::error("x").title_key(),
            "notification-title-error"
        );
        assert_eq!(
            Notification::success("x").title_key(),
            "notification-title-success"
        );
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::success("notification-bin-added").with_arg("bin", "BIN42");

        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message_key(), "notification-bin-added");
        assert_eq!(
            notification.message_args(),
            &[("bin".to_string(), "BIN42".to_string())]
        );
    }

    #[test]
    fn expiry_follows_severity_duration() {
        let success = Notification::success("x");
        let start = success.created_at;
        assert!(!success.is_expired(start + Duration::from_secs(2)));
        assert!(success.is_expired(start + Duration::from_secs(3)));

        let warning = Notification::warning("x");
        assert!(!warning.is_expired(warning.created_at + Duration::from_secs(4)));

        let error = Notification::error("x");
        assert!(!error.is_expired(error.created_at + Duration::from_secs(3600)));
    }

    #[test]
    fn position_defaults_to_top_right() {
        let position = Position::default();
        assert!(position.is_top());
        assert!(position.is_right());
        assert!(!Position::BottomLeft.is_top());
        assert!(!Position::BottomLeft.is_right());
    }
}
