// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the BIN list, its rendered view, and the UI
//! collaborators (notifications, confirmation dialog). Messages are routed to
//! the handlers in [`update`], which keep the view state in sync with the list.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::bin_list::{BinListController, ViewState};
use crate::i18n::fluent::I18n;
use crate::print::{PrintCommand, PrintJob, PrintLayout, PrintSheet};
use crate::qr::QrRenderer;
use crate::ui::confirm_dialog;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Widget id of the BIN input, refocused after each add.
pub const INPUT_ID: &str = "bin-input";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Print parameters resolved from the config at startup.
#[derive(Debug, Clone)]
pub struct PrintSettings {
    pub command: PrintCommand,
    pub layout: PrintLayout,
    pub cleanup_delay: Option<Duration>,
    /// Parent of the per-job spool directories.
    pub spool_root: PathBuf,
}

impl PrintSettings {
    /// Builds the job for one captured sheet.
    #[must_use]
    pub fn job(&self, sheet: PrintSheet) -> PrintJob {
        PrintJob {
            sheet,
            layout: self.layout,
            command: self.command.clone(),
            spool_root: self.spool_root.clone(),
            cleanup_delay: self.cleanup_delay,
        }
    }

    fn from_config(config: &config::Config, data_dir: Option<PathBuf>) -> Self {
        Self {
            command: config.print.command(),
            layout: config.print.layout(),
            cleanup_delay: config.print.cleanup_delay(),
            spool_root: paths::get_spool_dir_with_override(data_dir),
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: BinListController,
    view_state: ViewState,
    renderer: QrRenderer,
    /// Current text of the BIN input.
    input: String,
    confirm_dialog: confirm_dialog::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    print_settings: PrintSettings,
    /// Set while a print job is running; the Print button is disabled.
    print_in_progress: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.controller.len())
            .field("print_in_progress", &self.print_in_progress)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            controller: BinListController::new(),
            view_state: ViewState::Empty,
            renderer: QrRenderer::default(),
            input: String::new(),
            confirm_dialog: confirm_dialog::State::default(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            print_settings: PrintSettings::from_config(&config::Config::default(), None),
            print_in_progress: false,
        }
    }
}

impl App {
    /// Initializes application state from the config and launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.as_deref(), &config);

        let mut app = App {
            i18n,
            renderer: QrRenderer::new(config.qr.settings()),
            notifications: notifications::Manager::with_position(
                config.notifications.position.unwrap_or_default(),
            ),
            theme_mode: config.general.theme_mode,
            print_settings: PrintSettings::from_config(&config, flags.data_dir.clone()),
            ..Self::default()
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            spool = %app.print_settings.spool_root.display(),
            "application started"
        );

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            view_state: &mut self.view_state,
            renderer: &self.renderer,
            input: &mut self.input,
            confirm_dialog: &mut self.confirm_dialog,
            notifications: &mut self.notifications,
            print_settings: &self.print_settings,
            print_in_progress: &mut self.print_in_progress,
        };

        match message {
            Message::InputChanged(value) => update::handle_input_changed(&mut ctx, value),
            Message::AddRequested => update::handle_add(&mut ctx),
            Message::RemoveRequested(index) => update::handle_remove(&mut ctx, index),
            Message::ClearRequested => update::handle_clear_requested(&mut ctx),
            Message::ConfirmDialog(dialog_message) => {
                update::handle_confirm_dialog(&mut ctx, dialog_message)
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::PrintRequested => update::handle_print_requested(&mut ctx),
            Message::PrintFinished(result) => update::handle_print_finished(&mut ctx, result),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            input: &self.input,
            view_state: &self.view_state,
            entry_count: self.controller.len(),
            confirm_dialog: &self.confirm_dialog,
            notifications: &self.notifications,
            print_in_progress: self.print_in_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn add_remove_clear_through_messages() {
        let mut app = App::default();
        let _ = app.update(Message::InputChanged("4111 1111".into()));
        let _ = app.update(Message::AddRequested);
        let _ = app.update(Message::InputChanged("5500".into()));
        let _ = app.update(Message::AddRequested);
        assert_eq!(app.controller.len(), 2);
        assert_eq!(app.view_state.cards().len(), 2);
        assert_eq!(app.controller.entries()[0].as_str(), "BIN41111111");

        let _ = app.update(Message::RemoveRequested(0));
        assert_eq!(app.controller.entries()[0].as_str(), "BIN5500");

        let _ = app.update(Message::ClearRequested);
        assert!(app.confirm_dialog.is_open());
        let _ = app.update(Message::ConfirmDialog(confirm_dialog::Message::Confirm));
        assert!(app.controller.is_empty());
        assert!(app.view_state.is_empty());
    }

    #[test]
    fn escape_without_dialog_is_a_no_op() {
        let mut app = App::default();
        let _ = app.update(Message::InputChanged("1".into()));
        let _ = app.update(Message::AddRequested);
        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.controller.len(), 1);
        assert!(!app.controller.is_clear_pending());
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut app = App::default();
        let _ = app.update(Message::AddRequested);
        let id = app
            .notifications
            .visible()
            .next()
            .map(notifications::Notification::id)
            .unwrap();
        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn job_carries_configured_print_settings() {
        let settings = PrintSettings {
            command: PrintCommand {
                program: "lp".into(),
                args: vec!["-d".into(), "labels".into()],
            },
            layout: PrintLayout::default(),
            cleanup_delay: Some(Duration::from_millis(250)),
            spool_root: PathBuf::from("/tmp/binqr-spool"),
        };
        let job = settings.job(PrintSheet::default());
        assert_eq!(job.command, settings.command);
        assert_eq!(job.cleanup_delay, Some(Duration::from_millis(250)));
        assert_eq!(job.spool_root, settings.spool_root);
    }
}
