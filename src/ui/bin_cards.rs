// SPDX-License-Identifier: MPL-2.0
//! Widgets for the rendered BIN list.
//!
//! Turns a [`ViewState`] into either the empty-state placeholder or a wrapped
//! grid of label cards, each with its own remove button. The remove button
//! carries the card's index from the current render.

use crate::bin_list::{CardView, ViewState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{FilterMethod, Image};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Remove the entry at this index.
    Remove(usize),
}

/// Contextual data needed to render the cards.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_state: &'a ViewState,
}

/// Renders the list area.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.view_state {
        ViewState::Empty => empty_state(ctx.i18n),
        ViewState::Cards(cards) => {
            let cards: Vec<Element<'_, Message>> =
                cards.iter().map(|card| card_view(card, ctx.i18n)).collect();
            Container::new(
                Row::with_children(cards)
                    .spacing(spacing::LG)
                    .wrap()
                    .vertical_spacing(spacing::LG),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
        }
    }
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title")).size(typography::TITLE_SM);
    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(subtitle),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .center_x(Length::Fill)
    .into()
}

fn card_view<'a>(card: &'a CardView, i18n: &'a I18n) -> Element<'a, Message> {
    let label = Text::new(card.label.as_str()).size(typography::BODY_SM);

    let code: Element<'a, Message> = match (card.handle(), card.snapshot()) {
        (Some(handle), Some(snapshot)) => Image::new(handle.clone())
            .width(Length::Fixed(snapshot.width() as f32))
            .height(Length::Fixed(snapshot.height() as f32))
            .filter_method(FilterMethod::Nearest)
            .into(),
        _ => Text::new(i18n.tr("card-qr-error"))
            .size(typography::CAPTION)
            .align_x(alignment::Horizontal::Center)
            .into(),
    };

    let code_box = container(code)
        .width(Length::Fixed(sizing::CODE_BOX_WIDTH))
        .height(Length::Fixed(sizing::CODE_BOX_HEIGHT))
        .center_x(Length::Fixed(sizing::CODE_BOX_WIDTH))
        .center_y(Length::Fixed(sizing::CODE_BOX_HEIGHT))
        .style(styles::container::code_placeholder);

    let card_body = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(label)
            .push(code_box),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .padding([spacing::MD, spacing::XS])
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::card);

    let remove = button(Text::new(i18n.tr("button-remove")).size(typography::BODY_SM))
        .on_press(Message::Remove(card.index))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::danger);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(card_body)
        .push(remove)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bin_list::{render, BinListController};
    use crate::qr::QrRenderer;

    #[test]
    fn remove_messages_follow_render_indices() {
        let mut list = BinListController::new();
        list.add("11").unwrap();
        list.add("22").unwrap();
        list.add("33").unwrap();
        list.remove(0).unwrap();

        let view = render(&list, &QrRenderer::default());
        let messages: Vec<Message> = view
            .cards()
            .iter()
            .map(|card| Message::Remove(card.index))
            .collect();
        assert_eq!(messages, vec![Message::Remove(0), Message::Remove(1)]);
    }

    #[test]
    fn both_states_build_widgets() {
        let i18n = I18n::default();
        let empty = ViewState::Empty;
        let _ = view(ViewContext {
            i18n: &i18n,
            view_state: &empty,
        });

        let mut list = BinListController::new();
        list.add("4111").unwrap();
        let cards = render(&list, &QrRenderer::default());
        let _ = view(ViewContext {
            i18n: &i18n,
            view_state: &cards,
        });
    }
}
