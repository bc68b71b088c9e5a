// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **QR**: On-screen code size
//! - **Print**: Page geometry, raster scale and spool cleanup

// ==========================================================================
// QR Defaults
// ==========================================================================

/// Default width of a rendered code in pixels.
pub const DEFAULT_QR_WIDTH: u32 = 124;

/// Default height of a rendered code in pixels.
pub const DEFAULT_QR_HEIGHT: u32 = 120;

/// Smallest accepted code side. A version 1 symbol is 21 modules wide.
pub const MIN_QR_SIZE: u32 = 21;

/// Largest accepted code side.
pub const MAX_QR_SIZE: u32 = 1024;

// ==========================================================================
// Print Defaults
// ==========================================================================

/// A4 width at 96 dpi.
pub const DEFAULT_PAGE_WIDTH: f32 = 794.0;

/// A4 height at 96 dpi.
pub const DEFAULT_PAGE_HEIGHT: f32 = 1123.0;

/// Blank border kept on every page edge.
pub const DEFAULT_PAGE_PADDING: f32 = 16.0;

/// Raster scale applied to pages before spooling (2.0 = 192 dpi).
pub const DEFAULT_PRINT_SCALE: f32 = 2.0;

pub const MIN_PRINT_SCALE: f32 = 0.5;
pub const MAX_PRINT_SCALE: f32 = 8.0;

/// Wait after the print command exits before spool files are removed.
pub const DEFAULT_CLEANUP_DELAY_MS: u64 = 0;

/// Upper bound for the cleanup delay (one minute).
pub const MAX_CLEANUP_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_QR_SIZE > 0);
    assert!(MAX_QR_SIZE > MIN_QR_SIZE);
    assert!(DEFAULT_QR_WIDTH >= MIN_QR_SIZE);
    assert!(DEFAULT_QR_WIDTH <= MAX_QR_SIZE);
    assert!(DEFAULT_QR_HEIGHT >= MIN_QR_SIZE);
    assert!(DEFAULT_QR_HEIGHT <= MAX_QR_SIZE);

    assert!(DEFAULT_PAGE_WIDTH > 2.0 * DEFAULT_PAGE_PADDING);
    assert!(DEFAULT_PAGE_HEIGHT > 2.0 * DEFAULT_PAGE_PADDING);

    assert!(MIN_PRINT_SCALE > 0.0);
    assert!(MAX_PRINT_SCALE > MIN_PRINT_SCALE);
    assert!(DEFAULT_PRINT_SCALE >= MIN_PRINT_SCALE);
    assert!(DEFAULT_PRINT_SCALE <= MAX_PRINT_SCALE);

    assert!(DEFAULT_CLEANUP_DELAY_MS <= MAX_CLEANUP_DELAY_MS);
};
