// SPDX-License-Identifier: MPL-2.0
//! BIN identifier newtype.
//!
//! A `BinNumber` is always the literal prefix `BIN` followed by at least one
//! ASCII digit. No length or checksum rule is applied: any non-empty digit
//! string is accepted.

use crate::error::BinListError;
use std::fmt;

/// Prefix prepended to the sanitized digits.
pub const BIN_PREFIX: &str = "BIN";

/// Prefix of the human readable card label.
pub const LABEL_PREFIX: &str = "BIN - ";

/// Identifier of one list entry, e.g. `BIN41111111`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinNumber(String);

impl BinNumber {
    /// Builds an identifier from raw user input.
    ///
    /// Every character that is not an ASCII digit is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BinListError::Validation`] when no digit remains.
    pub fn parse(raw: &str) -> Result<Self, BinListError> {
        let digits = sanitize_digits(raw);
        if digits.is_empty() {
            return Err(BinListError::Validation);
        }
        Ok(Self(format!("{BIN_PREFIX}{digits}")))
    }

    /// The full identifier, which is also the QR payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digit part without the prefix.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0[BIN_PREFIX.len()..]
    }

    /// Text shown above the code on screen and on paper.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{LABEL_PREFIX}{}", self.0)
    }
}

impl fmt::Display for BinNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BinNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Keeps only ASCII digits from `raw`.
#[must_use]
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
