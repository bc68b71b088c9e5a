// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler mutates the list through the controller, rebuilds the view
//! state when the list changed, and reports the outcome as a notification.

use super::{Message, PrintSettings, INPUT_ID};
use crate::bin_list::{render, BinListController, ViewState};
use crate::error::{BinListError, Error};
use crate::print::{self, PrintReceipt, PrintSheet};
use crate::qr::QrRenderer;
use crate::ui::confirm_dialog::{self, Event as ConfirmEvent};
use crate::ui::notifications::{self, Notification};
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable slice of the app state the handlers work on.
pub struct UpdateContext<'a> {
    pub controller: &'a mut BinListController,
    pub view_state: &'a mut ViewState,
    pub renderer: &'a QrRenderer,
    pub input: &'a mut String,
    pub confirm_dialog: &'a mut confirm_dialog::State,
    pub notifications: &'a mut notifications::Manager,
    pub print_settings: &'a PrintSettings,
    pub print_in_progress: &'a mut bool,
}

impl UpdateContext<'_> {
    fn rerender(&mut self) {
        *self.view_state = render(self.controller, self.renderer);
    }

    fn notify_error(&mut self, error: BinListError) {
        self.notifications
            .push(Notification::error(error.i18n_key()));
    }
}

pub fn handle_input_changed(ctx: &mut UpdateContext<'_>, value: String) -> Task<Message> {
    *ctx.input = value;
    Task::none()
}

/// Adds the current input. The input is kept on failure so the user can fix it.
pub fn handle_add(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.controller.add(ctx.input.as_str()) {
        Ok(bin) => {
            ctx.rerender();
            ctx.notifications.push(
                Notification::success("notification-bin-added").with_arg("bin", bin.to_string()),
            );
            ctx.input.clear();
        }
        Err(e) => ctx.notify_error(e),
    }
    operation::focus(Id::new(INPUT_ID))
}

pub fn handle_remove(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    match ctx.controller.remove(index) {
        Ok(bin) => {
            ctx.rerender();
            ctx.notifications.push(
                Notification::success("notification-bin-removed")
                    .with_arg("bin", bin.to_string()),
            );
        }
        Err(e) => ctx.notify_error(e),
    }
    Task::none()
}

/// First phase of "Clear all": opens the dialog when there is something to clear.
pub fn handle_clear_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.controller.request_clear() {
        Ok(()) => ctx.confirm_dialog.open(),
        Err(e) => ctx.notify_error(e),
    }
    Task::none()
}

pub fn handle_confirm_dialog(
    ctx: &mut UpdateContext<'_>,
    message: confirm_dialog::Message,
) -> Task<Message> {
    match confirm_dialog::update(ctx.confirm_dialog, message) {
        ConfirmEvent::Confirmed => {
            if let Some(removed) = ctx.controller.confirm_clear() {
                ctx.rerender();
                ctx.notifications.push(
                    Notification::success("notification-cleared")
                        .with_arg("count", removed.to_string()),
                );
            }
        }
        ConfirmEvent::Dismissed => ctx.controller.cancel_clear(),
        ConfirmEvent::None => {}
    }
    Task::none()
}

/// Escape cancels an open dialog and is ignored otherwise.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.confirm_dialog.is_open() {
        return handle_confirm_dialog(ctx, confirm_dialog::Message::Cancel);
    }
    Task::none()
}

/// Captures the rendered codes and starts a background print job.
pub fn handle_print_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.print_in_progress {
        tracing::debug!("print already running, ignoring request");
        return Task::none();
    }

    let sheet = match PrintSheet::capture(ctx.controller, ctx.view_state) {
        Ok(sheet) => sheet,
        Err(e) => {
            ctx.notify_error(e);
            return Task::none();
        }
    };

    ctx.notifications.push(
        Notification::info("notification-print-started")
            .with_arg("count", sheet.len().to_string()),
    );
    *ctx.print_in_progress = true;

    let job = ctx.print_settings.job(sheet);
    Task::perform(print::submit(job), Message::PrintFinished)
}

pub fn handle_print_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<PrintReceipt, Error>,
) -> Task<Message> {
    *ctx.print_in_progress = false;
    match result {
        Ok(receipt) => ctx.notifications.push(
            Notification::success("notification-print-success")
                .with_arg("pages", receipt.pages.to_string()),
        ),
        Err(e) => ctx.notifications.push(
            Notification::error("notification-print-error").with_arg("error", e.to_string()),
        ),
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::fluent::I18n;
    use crate::print::{PrintCommand, PrintLayout};
    use crate::ui::notifications::Severity;
    use std::path::PathBuf;

    struct Fixture {
        controller: BinListController,
        view_state: ViewState,
        renderer: QrRenderer,
        input: String,
        dialog: confirm_dialog::State,
        notifications: notifications::Manager,
        print_settings: PrintSettings,
        printing: bool,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                controller: BinListController::new(),
                view_state: ViewState::Empty,
                renderer: QrRenderer::default(),
                input: String::new(),
                dialog: confirm_dialog::State::default(),
                notifications: notifications::Manager::new(),
                print_settings: PrintSettings {
                    command: PrintCommand::default(),
                    layout: PrintLayout::default(),
                    cleanup_delay: None,
                    spool_root: PathBuf::from("unused"),
                },
                printing: false,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                controller: &mut self.controller,
                view_state: &mut self.view_state,
                renderer: &self.renderer,
                input: &mut self.input,
                confirm_dialog: &mut self.dialog,
                notifications: &mut self.notifications,
                print_settings: &self.print_settings,
                print_in_progress: &mut self.printing,
            }
        }

        /// Newest visible notification.
        fn latest_message_key(&self) -> Option<String> {
            self.notifications
                .visible()
                .next()
                .map(|n| n.message_key().to_owned())
        }

        fn add(&mut self, input: &str) {
            self.input = input.to_owned();
            let _ = handle_add(&mut self.ctx());
        }
    }

    #[test]
    fn add_renders_clears_input_and_notifies() {
        let mut f = Fixture::new();
        f.add("4111 1111");
        assert_eq!(f.controller.len(), 1);
        assert_eq!(f.view_state.cards().len(), 1);
        assert!(f.input.is_empty());
        assert_eq!(f.latest_message_key().as_deref(), Some("notification-bin-added"));
    }

    #[test]
    fn add_and_remove_report_success_with_identifier() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let mut f = Fixture::new();
        f.add("4111 1111");
        {
            let added = f.notifications.visible().next().unwrap();
            assert_eq!(added.severity(), Severity::Success);
            let args: Vec<(&str, &str)> = added
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            assert_eq!(
                i18n.tr_with_args(added.message_key(), &args),
                "BIN41111111 added successfully!"
            );
        }

        let _ = handle_remove(&mut f.ctx(), 0);
        let removed = f.notifications.visible().next().unwrap();
        assert_eq!(removed.message_key(), "notification-bin-removed");
        assert_eq!(removed.severity(), Severity::Success);
        assert!(removed
            .message_args()
            .iter()
            .any(|(k, v)| k == "bin" && v == "BIN41111111"));
    }

    #[test]
    fn invalid_add_keeps_input_and_reports() {
        let mut f = Fixture::new();
        f.add("abc");
        assert!(f.controller.is_empty());
        assert_eq!(f.input, "abc");
        assert_eq!(
            f.latest_message_key().as_deref(),
            Some("notification-bin-required")
        );
    }

    #[test]
    fn remove_rerenders() {
        let mut f = Fixture::new();
        f.add("1");
        f.add("2");
        let _ = handle_remove(&mut f.ctx(), 0);
        assert_eq!(f.controller.entries()[0].as_str(), "BIN2");
        assert_eq!(f.view_state.cards().len(), 1);
    }

    #[test]
    fn out_of_range_remove_is_reported() {
        let mut f = Fixture::new();
        let _ = handle_remove(&mut f.ctx(), 3);
        assert_eq!(
            f.latest_message_key().as_deref(),
            Some("notification-remove-invalid")
        );
    }

    #[test]
    fn clear_needs_confirmation() {
        let mut f = Fixture::new();
        f.add("1");
        let _ = handle_clear_requested(&mut f.ctx());
        assert!(f.dialog.is_open());
        assert_eq!(f.controller.len(), 1);

        let _ = handle_confirm_dialog(&mut f.ctx(), confirm_dialog::Message::Confirm);
        assert!(!f.dialog.is_open());
        assert!(f.controller.is_empty());
        assert!(f.view_state.is_empty());
    }

    #[test]
    fn escape_cancels_pending_clear() {
        let mut f = Fixture::new();
        f.add("1");
        let _ = handle_clear_requested(&mut f.ctx());
        let _ = handle_escape(&mut f.ctx());
        assert!(!f.dialog.is_open());
        assert!(!f.controller.is_clear_pending());
        assert_eq!(f.controller.len(), 1);
    }

    #[test]
    fn clear_on_empty_list_does_not_open_dialog() {
        let mut f = Fixture::new();
        let _ = handle_clear_requested(&mut f.ctx());
        assert!(!f.dialog.is_open());
        assert_eq!(
            f.latest_message_key().as_deref(),
            Some("notification-nothing-to-clear")
        );
    }

    #[test]
    fn print_on_empty_list_is_refused() {
        let mut f = Fixture::new();
        let _ = handle_print_requested(&mut f.ctx());
        assert!(!f.printing);
        assert_eq!(
            f.latest_message_key().as_deref(),
            Some("notification-nothing-to-print")
        );
    }

    #[test]
    fn print_marks_job_in_progress_until_finished() {
        let mut f = Fixture::new();
        f.add("4111");
        let _ = handle_print_requested(&mut f.ctx());
        assert!(f.printing);
        assert_eq!(f.controller.len(), 1);

        let _ = handle_print_finished(
            &mut f.ctx(),
            Err(Error::Print("printer offline".into())),
        );
        assert!(!f.printing);
        assert_eq!(
            f.latest_message_key().as_deref(),
            Some("notification-print-error")
        );
    }
}
