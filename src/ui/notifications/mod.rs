// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Every list operation reports its outcome here: BIN added or removed, list
//! cleared, print started or failed, and the validation errors.
//!
//! Success and info toasts disappear after 3s, warnings after 5s, errors stay
//! until dismissed. At most 3 are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Position, Severity};
pub use toast::Toast;
