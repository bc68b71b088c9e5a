// SPDX-License-Identifier: MPL-2.0
//! QR code rasterization.
//!
//! Codes are drawn once into an RGBA buffer ([`QrImage`]). The same buffer
//! feeds the on-screen image handle and the printed page, so what gets
//! printed is pixel-identical to what was displayed.

use crate::error::Result;
use iced::widget::image::Handle;
use image_rs::codecs::png::PngEncoder;
use image_rs::{ExtendedColorType, ImageEncoder};
use qrcode::{Color as Module, EcLevel, QrCode};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Width of the quiet zone in modules, as recommended by ISO/IEC 18004.
pub const QUIET_ZONE_MODULES: usize = 4;

const DARK: [u8; 4] = [0, 0, 0, 255];
const LIGHT: [u8; 4] = [255, 255, 255, 255];

/// Error correction level used when encoding.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    #[default]
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Rendering parameters for every code in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrSettings {
    /// Target width of the drawn surface in pixels.
    pub width: u32,
    /// Target height of the drawn surface in pixels.
    pub height: u32,
    pub error_correction: ErrorCorrection,
    /// Whether to surround the symbol with a light quiet zone.
    pub quiet_zone: bool,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            width: crate::config::DEFAULT_QR_WIDTH,
            height: crate::config::DEFAULT_QR_HEIGHT,
            error_correction: ErrorCorrection::default(),
            quiet_zone: true,
        }
    }
}

/// A drawn QR code: RGBA8 pixels, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct QrImage {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl fmt::Debug for QrImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl QrImage {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGBA value at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(rgba)
    }

    /// Creates an Iced image handle showing these exact pixels.
    #[must_use]
    pub fn handle(&self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels.to_vec())
    }

    /// Encodes the pixels as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG encoder fails.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer).write_image(
            &self.pixels,
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(buffer)
    }
}

/// Draws QR codes with fixed settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QrRenderer {
    settings: QrSettings,
}

impl QrRenderer {
    #[must_use]
    pub fn new(settings: QrSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> QrSettings {
        self.settings
    }

    /// Encodes `payload` verbatim and draws it.
    ///
    /// Modules are square with an integer pixel size and the symbol is
    /// centered in the target box. When the box is smaller than one pixel
    /// per module the image grows to fit the symbol.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Qr`] when the payload does not fit in
    /// a QR symbol at the configured error correction level.
    pub fn render(&self, payload: &str) -> Result<QrImage> {
        let code = QrCode::with_error_correction_level(
            payload.as_bytes(),
            self.settings.error_correction.into(),
        )?;
        let symbol = code.width();
        let modules = code.to_colors();
        let margin = if self.settings.quiet_zone {
            QUIET_ZONE_MODULES
        } else {
            0
        };
        let span = (symbol + 2 * margin) as u32;

        let target = self.settings.width.min(self.settings.height);
        let module_px = (target / span).max(1);
        let drawn = module_px * span;
        let width = self.settings.width.max(drawn);
        let height = self.settings.height.max(drawn);
        let offset_x = (width - drawn) / 2;
        let offset_y = (height - drawn) / 2;

        let mut pixels: Vec<u8> = LIGHT
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();

        for (index, module) in modules.iter().enumerate() {
            if *module != Module::Dark {
                continue;
            }
            let mx = (index % symbol + margin) as u32;
            let my = (index / symbol + margin) as u32;
            let left = offset_x + mx * module_px;
            let top = offset_y + my * module_px;
            for y in top..top + module_px {
                let row = (y * width) as usize;
                for x in left..left + module_px {
                    let offset = (row + x as usize) * 4;
                    pixels[offset..offset + 4].copy_from_slice(&DARK);
                }
            }
        }

        Ok(QrImage {
            width,
            height,
            pixels: pixels.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn renderer(width: u32, height: u32, quiet_zone: bool) -> QrRenderer {
        QrRenderer::new(QrSettings {
            width,
            height,
            error_correction: ErrorCorrection::High,
            quiet_zone,
        })
    }

    #[test]
    fn render_matches_target_box() {
        let image = renderer(124, 120, true).render("BIN41111111").unwrap();
        assert_eq!(image.width(), 124);
        assert_eq!(image.height(), 120);
        assert_eq!(image.pixels().len(), 124 * 120 * 4);
    }

    #[test]
    fn render_is_deterministic() {
        let r = renderer(124, 120, true);
        assert_eq!(r.render("BIN123").unwrap(), r.render("BIN123").unwrap());
        assert_ne!(r.render("BIN123").unwrap(), r.render("BIN124").unwrap());
    }

    #[test]
    fn quiet_zone_keeps_border_light() {
        let image = renderer(124, 120, true).render("BIN1").unwrap();
        assert_eq!(image.pixel(0, 0), Some(LIGHT));
        assert_eq!(image.pixel(123, 119), Some(LIGHT));
    }

    #[test]
    fn finder_pattern_corner_is_dark_without_quiet_zone() {
        // Version 1 symbol (21 modules) in a 21px box: one pixel per module.
        let image = renderer(21, 21, false).render("BIN1").unwrap();
        assert_eq!(image.pixel(0, 0), Some(DARK));
        assert_eq!(image.pixel(20, 0), Some(DARK));
        assert_eq!(image.pixel(0, 20), Some(DARK));
        // Inside the finder ring's light separator.
        assert_eq!(image.pixel(1, 1), Some(LIGHT));
    }

    #[test]
    fn tiny_target_grows_to_fit_symbol() {
        let image = renderer(4, 4, true).render("BIN1").unwrap();
        assert_eq!(image.width(), 29);
        assert_eq!(image.height(), 29);
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let payload = format!("BIN{}", "9".repeat(4000));
        let err = renderer(124, 120, true).render(&payload).unwrap_err();
        assert!(matches!(err, Error::Qr(_)));
    }

    #[test]
    fn png_encoding_produces_png_signature() {
        let png = renderer(64, 64, true).render("BIN55").unwrap().to_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn pixel_outside_bounds_is_none() {
        let image = renderer(30, 30, true).render("BIN1").unwrap();
        assert!(image.pixel(30, 0).is_none());
        assert!(image.pixel(0, 30).is_none());
    }
}
