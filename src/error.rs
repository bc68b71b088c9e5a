// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Qr(String),
    Print(String),
}

/// Failures of the BIN list operations.
///
/// All of them are recovered where the operation was triggered and shown
/// to the user as a notification; none is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinListError {
    /// The add input contained no digits.
    Validation,
    /// Clear or print was requested while the list is empty.
    EmptyState(EmptyOperation),
    /// A removal index outside the current list.
    Index { index: usize, len: usize },
}

/// Operation that was refused because the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyOperation {
    Clear,
    Print,
}

impl BinListError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BinListError::Validation => "notification-bin-required",
            BinListError::EmptyState(EmptyOperation::Clear) => "notification-nothing-to-clear",
            BinListError::EmptyState(EmptyOperation::Print) => "notification-nothing-to-print",
            BinListError::Index { .. } => "notification-remove-invalid",
        }
    }
}

impl fmt::Display for BinListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinListError::Validation => write!(f, "BIN value required"),
            BinListError::EmptyState(EmptyOperation::Clear) => write!(f, "Nothing to clear"),
            BinListError::EmptyState(EmptyOperation::Print) => write!(f, "Nothing to print"),
            BinListError::Index { index, len } => {
                write!(f, "Index {} out of range for list of {}", index, len)
            }
        }
    }
}

impl std::error::Error for BinListError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Qr(e) => write!(f, "QR Error: {}", e),
            Error::Print(e) => write!(f, "Print Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(err: qrcode::types::QrError) -> Self {
        Error::Qr(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
