// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out header, input row, actions, the card grid and the footer, then
//! stacks the toast overlay and the confirmation dialog on top.

use super::{Message, INPUT_ID};
use crate::bin_list::ViewState;
use crate::i18n::fluent::I18n;
use crate::ui::bin_cards::{self, ViewContext as CardsViewContext};
use crate::ui::confirm_dialog::{self, ViewContext as DialogViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{
    button, scrollable, stack, text, text_input, Column, Container, Id, Row, Text,
};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub input: &'a str,
    pub view_state: &'a ViewState,
    pub entry_count: usize,
    pub confirm_dialog: &'a confirm_dialog::State,
    pub notifications: &'a notifications::Manager,
    pub print_in_progress: bool,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let cards = bin_cards::view(CardsViewContext {
        i18n,
        view_state: ctx.view_state,
    })
    .map(|message| match message {
        bin_cards::Message::Remove(index) => Message::RemoveRequested(index),
    });

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(header(i18n))
        .push(input_row(i18n, ctx.input))
        .push(action_row(i18n, ctx.entry_count, ctx.print_in_progress))
        .push(
            scrollable(Container::new(cards).padding(spacing::XS).width(Length::Fill))
                .height(Length::Fill),
        )
        .push(footer(i18n));

    let base: Element<'_, Message> = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);
    let with_toasts: Element<'_, Message> = stack![base, toasts].into();

    confirm_dialog::view(
        ctx.confirm_dialog,
        with_toasts,
        DialogViewContext { i18n },
        Message::ConfirmDialog,
    )
}

fn header(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("header-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(i18n.tr("header-subtitle"))
        .size(typography::BODY)
        .style(muted);

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(subtitle),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .center_x(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn input_row<'a>(i18n: &I18n, input: &'a str) -> Element<'a, Message> {
    let field = text_input(&i18n.tr("input-placeholder"), input)
        .id(Id::new(INPUT_ID))
        .on_input(Message::InputChanged)
        .on_submit(Message::AddRequested)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let add = button(
        Text::new(i18n.tr("button-add"))
            .size(typography::BODY)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::AddRequested)
    .height(Length::Fixed(sizing::INPUT_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(field)
            .push(add)
            .width(Length::Fixed(sizing::INPUT_ROW_WIDTH)),
    )
    .center_x(Length::Fill)
    .into()
}

fn action_row(i18n: &I18n, entry_count: usize, print_in_progress: bool) -> Element<'_, Message> {
    let print_label = if print_in_progress {
        i18n.tr("button-printing")
    } else {
        i18n.tr("button-print")
    };
    let print = button(Text::new(print_label).size(typography::BODY))
        .on_press_maybe((!print_in_progress).then_some(Message::PrintRequested))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::success);

    let clear = button(Text::new(i18n.tr("button-clear")).size(typography::BODY))
        .on_press(Message::ClearRequested)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::danger);

    let count = entry_count.to_string();
    let counter = Text::new(i18n.tr_with_args("list-count", &[("count", count.as_str())]))
        .size(typography::BODY_SM)
        .style(muted);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Row::new().spacing(spacing::SM).push(print).push(clear))
        .push(counter)
        .into()
}

fn footer(i18n: &I18n) -> Element<'_, Message> {
    let year = chrono::Local::now().year().to_string();
    let app = i18n.tr("app-name");
    let line = i18n.tr_with_args(
        "footer-copyright",
        &[("year", year.as_str()), ("app", app.as_str())],
    );

    Container::new(Text::new(line).size(typography::CAPTION).style(muted))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}
