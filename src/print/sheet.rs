// SPDX-License-Identifier: MPL-2.0
//! Snapshot of the rendered list taken when printing starts.

use crate::bin_list::{BinListController, ViewState};
use crate::error::{BinListError, EmptyOperation};
use crate::qr::QrImage;

/// One printed label.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintItem {
    pub label: String,
    pub payload: String,
    /// Pixels copied from the on-screen card, never re-encoded.
    pub snapshot: QrImage,
}

/// Ordered labels to print.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrintSheet {
    items: Vec<PrintItem>,
}

impl PrintSheet {
    /// Captures every rendered code of `view`, in list order.
    ///
    /// Cards whose payload could not be encoded have nothing to capture and
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`BinListError::EmptyState`] when the list is empty or no card
    /// carries a drawn code.
    pub fn capture(list: &BinListController, view: &ViewState) -> Result<Self, BinListError> {
        list.ensure_printable()?;

        let items: Vec<PrintItem> = view
            .cards()
            .iter()
            .filter_map(|card| match card.snapshot() {
                Some(snapshot) => Some(PrintItem {
                    label: card.label.clone(),
                    payload: card.bin.as_str().to_owned(),
                    snapshot: snapshot.clone(),
                }),
                None => {
                    tracing::warn!(bin = %card.bin, "skipping BIN without a drawn code");
                    None
                }
            })
            .collect();

        if items.is_empty() {
            return Err(BinListError::EmptyState(EmptyOperation::Print));
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[PrintItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
