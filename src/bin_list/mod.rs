// SPDX-License-Identifier: MPL-2.0
//! BIN list domain: identifiers, the list controller, and its derived view.
//!
//! - [`bin_number`] - `BinNumber` newtype and input sanitization
//! - [`controller`] - `BinListController` with add/remove/clear
//! - [`view_state`] - `ViewState` rebuilt from the list after each change

pub mod bin_number;
pub mod controller;
pub mod view_state;

pub use bin_number::{sanitize_digits, BinNumber, BIN_PREFIX, LABEL_PREFIX};
pub use controller::BinListController;
pub use view_state::{render, CardView, ViewState};
