// SPDX-License-Identifier: MPL-2.0
//! The BIN list and its mutating operations.
//!
//! The controller owns the ordered identifier list. It never touches the UI:
//! callers re-render the [`ViewState`](super::ViewState) and emit
//! notifications based on the returned values.

use super::bin_number::BinNumber;
use crate::error::{BinListError, EmptyOperation};

/// In-memory ordered collection of BIN identifiers.
///
/// Duplicates are allowed and insertion order is preserved. Indices are
/// positional and change after every removal.
#[derive(Debug, Clone, Default)]
pub struct BinListController {
    entries: Vec<BinNumber>,
    /// Set by `request_clear`, consumed by `confirm_clear`/`cancel_clear`.
    pending_clear: bool,
}

impl BinListController {
    /// Creates an empty controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitizes `raw_input` and appends the resulting identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BinListError::Validation`] when the input has no digits.
    /// The list is left unchanged in that case.
    pub fn add(&mut self, raw_input: &str) -> Result<BinNumber, BinListError> {
        let bin = BinNumber::parse(raw_input)?;
        self.entries.push(bin.clone());
        tracing::debug!(bin = %bin, len = self.entries.len(), "BIN added");
        Ok(bin)
    }

    /// Removes the entry at `index`, shifting later entries left.
    ///
    /// # Errors
    ///
    /// Returns [`BinListError::Index`] when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<BinNumber, BinListError> {
        let len = self.entries.len();
        if index >= len {
            tracing::warn!(index, len, "remove requested outside of list");
            return Err(BinListError::Index { index, len });
        }
        let removed = self.entries.remove(index);
        tracing::debug!(bin = %removed, index, "BIN removed");
        Ok(removed)
    }

    /// First phase of clearing: asks for confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`BinListError::EmptyState`] when there is nothing to clear.
    pub fn request_clear(&mut self) -> Result<(), BinListError> {
        if self.entries.is_empty() {
            return Err(BinListError::EmptyState(EmptyOperation::Clear));
        }
        self.pending_clear = true;
        Ok(())
    }

    /// Second phase of clearing. Empties the list only if a clear was
    /// requested; returns how many entries were removed.
    pub fn confirm_clear(&mut self) -> Option<usize> {
        if !std::mem::take(&mut self.pending_clear) {
            return None;
        }
        let removed = self.entries.len();
        self.entries.clear();
        tracing::debug!(removed, "BIN list cleared");
        Some(removed)
    }

    /// Abandons a pending clear without touching the list.
    pub fn cancel_clear(&mut self) {
        self.pending_clear = false;
    }

    /// Whether a clear is waiting for confirmation.
    #[must_use]
    pub fn is_clear_pending(&self) -> bool {
        self.pending_clear
    }

    /// Fails with [`BinListError::EmptyState`] when printing has nothing to do.
    ///
    /// # Errors
    ///
    /// Returns the error when the list is empty.
    pub fn ensure_printable(&self) -> Result<(), BinListError> {
        if self.entries.is_empty() {
            Err(BinListError::EmptyState(EmptyOperation::Print))
        } else {
            Ok(())
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[BinNumber] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
