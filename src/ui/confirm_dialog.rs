// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation for clearing the whole list.
//!
//! The dialog sits on top of the main view behind a dimmed backdrop.
//! Confirm is the only way to accept; the cancel button, a click on the
//! backdrop and Escape all dismiss it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, mouse_area, opaque, stack, Column, Row, Text};
use iced::{alignment, Element, Length};

/// Whether the dialog is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    open: bool,
}

impl State {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Confirm,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Confirmed,
    Dismissed,
}

/// Closes the dialog and reports how it ended.
///
/// Messages arriving while the dialog is closed are ignored.
pub fn update(state: &mut State, message: Message) -> Event {
    if !state.is_open() {
        return Event::None;
    }
    state.close();
    match message {
        Message::Confirm => Event::Confirmed,
        Message::Cancel => Event::Dismissed,
    }
}

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders `base` with the dialog on top when `state` is open.
pub fn view<'a, M>(
    state: &State,
    base: Element<'a, M>,
    ctx: ViewContext<'_>,
    on_message: impl Fn(Message) -> M + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    if !state.is_open() {
        return base;
    }

    let backdrop_click = on_message(Message::Cancel);
    let dialog = dialog(ctx).map(on_message);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(dialog)).style(styles::container::modal_backdrop))
                .on_press(backdrop_click)
        )
    ]
    .into()
}

fn dialog(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let title = Text::new(ctx.i18n.tr("confirm-clear-title")).size(typography::TITLE_SM);
    let body = Text::new(ctx.i18n.tr("confirm-clear-body")).size(typography::BODY);

    let cancel = button(Text::new(ctx.i18n.tr("confirm-clear-cancel")).size(typography::BODY))
        .on_press(Message::Cancel)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);
    let confirm = button(Text::new(ctx.i18n.tr("confirm-clear-confirm")).size(typography::BODY))
        .on_press(Message::Confirm)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::danger);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(cancel)
        .push(confirm);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(body)
        .push(actions);

    container(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::panel)
        .into()
}
