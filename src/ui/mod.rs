// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes its own `Message`, and the application maps them into its own.
//!
//! # Components
//!
//! - [`bin_cards`] - Label cards for the BIN list and the empty state
//! - [`confirm_dialog`] - Modal confirmation before clearing the list
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod bin_cards;
pub mod confirm_dialog;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
