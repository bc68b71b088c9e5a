// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` files, optionally replaced from a directory (`--i18n-dir`)
//! - Named arguments in messages (`{ $bin }`)
//! - Fallback to `en-US` when a key is missing from the active locale

pub mod fluent;

pub use fluent::I18n;
