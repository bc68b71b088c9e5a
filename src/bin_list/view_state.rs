// SPDX-License-Identifier: MPL-2.0
//! Derived view of the BIN list.
//!
//! The view state is rebuilt from scratch after every mutation. It owns the
//! drawn QR pixels so that printing can reuse exactly what is on screen.

use super::bin_number::BinNumber;
use super::controller::BinListController;
use crate::qr::{QrImage, QrRenderer};
use iced::widget::image::Handle;

/// Everything needed to draw one list entry.
#[derive(Debug, Clone)]
pub struct CardView {
    /// Position of the entry in the list at render time.
    pub index: usize,
    pub bin: BinNumber,
    /// `"BIN - " + identifier`.
    pub label: String,
    /// Drawn code, or the encoder's error message.
    pub qr: Result<QrImage, String>,
    handle: Option<Handle>,
}

impl CardView {
    /// Image handle for the drawn code.
    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// The drawn code, if encoding succeeded.
    #[must_use]
    pub fn snapshot(&self) -> Option<&QrImage> {
        self.qr.as_ref().ok()
    }
}

impl PartialEq for CardView {
    fn eq(&self, other: &Self) -> bool {
        // Handles carry a per-allocation id; compare what they show instead.
        self.index == other.index
            && self.bin == other.bin
            && self.label == other.label
            && self.qr == other.qr
    }
}

/// Rendered state of the whole list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Placeholder shown when there are no entries.
    #[default]
    Empty,
    /// One card per entry, in list order.
    Cards(Vec<CardView>),
}

impl ViewState {
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        match self {
            ViewState::Empty => &[],
            ViewState::Cards(cards) => cards,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }
}

/// Builds the view for the current list contents.
#[must_use]
pub fn render(list: &BinListController, renderer: &QrRenderer) -> ViewState {
    if list.is_empty() {
        return ViewState::Empty;
    }

    let cards = list
        .entries()
        .iter()
        .enumerate()
        .map(|(index, bin)| {
            let qr = renderer.render(bin.as_str()).map_err(|err| {
                tracing::warn!(bin = %bin, %err, "cannot encode BIN as QR code");
                err.to_string()
            });
            let handle = qr.as_ref().ok().map(QrImage::handle);
            CardView {
                index,
                bin: bin.clone(),
                label: bin.label(),
                qr,
                handle,
            }
        })
        .collect();

    ViewState::Cards(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_placeholder() {
        let view = render(&BinListController::new(), &QrRenderer::default());
        assert!(view.is_empty());
        assert!(view.cards().is_empty());
    }

    #[test]
    fn cards_follow_list_order_and_indices() {
        let mut list = BinListController::new();
        list.add("111").unwrap();
        list.add("222").unwrap();
        let view = render(&list, &QrRenderer::default());

        let cards = view.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].index, 0);
        assert_eq!(cards[0].label, "BIN - BIN111");
        assert_eq!(cards[1].index, 1);
        assert_eq!(cards[1].bin.as_str(), "BIN222");
        assert!(cards.iter().all(|card| card.handle().is_some()));
    }

    #[test]
    fn indices_are_renumbered_after_removal() {
        let mut list = BinListController::new();
        for input in ["1", "2", "3"] {
            list.add(input).unwrap();
        }
        list.remove(0).unwrap();
        let view = render(&list, &QrRenderer::default());
        let indices: Vec<usize> = view.cards().iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(view.cards()[0].bin.as_str(), "BIN2");
    }

    #[test]
    fn render_twice_is_identical() {
        let mut list = BinListController::new();
        list.add("4111 1111").unwrap();
        let renderer = QrRenderer::default();
        assert_eq!(render(&list, &renderer), render(&list, &renderer));
    }

    #[test]
    fn unencodable_entry_keeps_its_card() {
        let mut list = BinListController::new();
        list.add(&"9".repeat(4000)).unwrap();
        let view = render(&list, &QrRenderer::default());
        let card = &view.cards()[0];
        assert!(card.qr.is_err());
        assert!(card.handle().is_none());
        assert!(card.snapshot().is_none());
    }
}
