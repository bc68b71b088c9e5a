// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::print::PrintReceipt;
use crate::ui::confirm_dialog;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The BIN input text changed.
    InputChanged(String),
    /// Add button pressed or Enter in the input.
    AddRequested,
    /// Remove button of the card at this index in the current render.
    RemoveRequested(usize),
    /// "Clear all" pressed; opens the confirmation dialog.
    ClearRequested,
    ConfirmDialog(confirm_dialog::Message),
    /// Escape pressed anywhere in the window.
    EscapePressed,
    PrintRequested,
    /// Result of the background print job.
    PrintFinished(Result<PrintReceipt, Error>),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the launcher to bootstrap the app state.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing `.ftl` files that replace the embedded ones.
    pub i18n_dir: Option<PathBuf>,
    /// Optional data directory override (spool files).
    pub data_dir: Option<PathBuf>,
    /// Optional config directory override (settings.toml).
    pub config_dir: Option<PathBuf>,
}
