// SPDX-License-Identifier: MPL-2.0
//! `binqr` builds a list of BIN identifiers, shows each as a QR label card,
//! and prints the labels through the platform print command.
//!
//! The list and its rendering live in [`bin_list`] and [`qr`], printing in
//! [`print`], and the Iced application shell in [`app`] and [`ui`].

pub mod app;
pub mod bin_list;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod print;
pub mod qr;
pub mod ui;

pub use app::config;
