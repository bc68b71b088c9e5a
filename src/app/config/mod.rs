// SPDX-License-Identifier: MPL-2.0
//! User settings read from `settings.toml` at startup.
//!
//! Sections: `[general]` (language, theme), `[qr]` (code size, error
//! correction, quiet zone), `[print]` (command, page geometry, spool cleanup)
//! and `[notifications]` (toast corner). Every field is optional; missing
//! ones take the values in [`defaults`]. The file lives in the directory
//! chosen by `--config-dir`, `BINQR_CONFIG_DIR` or the platform config dir.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::print::{PrintCommand, PrintLayout};
use crate::qr::{ErrorCorrection, QrSettings};
use crate::ui::notifications::Position;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// On-screen QR code settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct QrConfig {
    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub error_correction: Option<ErrorCorrection>,

    /// Draw a light 4-module border around each code.
    #[serde(default)]
    pub quiet_zone: Option<bool>,
}

impl QrConfig {
    /// Resolves the renderer settings, clamping sizes to the accepted range.
    #[must_use]
    pub fn settings(&self) -> QrSettings {
        QrSettings {
            width: self
                .width
                .unwrap_or(DEFAULT_QR_WIDTH)
                .clamp(MIN_QR_SIZE, MAX_QR_SIZE),
            height: self
                .height
                .unwrap_or(DEFAULT_QR_HEIGHT)
                .clamp(MIN_QR_SIZE, MAX_QR_SIZE),
            error_correction: self.error_correction.unwrap_or_default(),
            quiet_zone: self.quiet_zone.unwrap_or(true),
        }
    }
}

/// Printing settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct PrintConfig {
    /// Program receiving the page files (`lp` or `mspaint` by default).
    #[serde(default)]
    pub program: Option<String>,

    /// Arguments; `{file}` runs the program once per page.
    #[serde(default)]
    pub args: Option<Vec<String>>,

    /// Wait after the program exits before spool files are removed.
    #[serde(default)]
    pub cleanup_delay_ms: Option<u64>,

    #[serde(default)]
    pub page_width: Option<f32>,

    #[serde(default)]
    pub page_height: Option<f32>,

    /// Raster scale of pages (2.0 = 192 dpi).
    #[serde(default)]
    pub scale: Option<f32>,
}

impl PrintConfig {
    /// Resolves the print command; a configured program without `args`
    /// runs with no extra arguments.
    #[must_use]
    pub fn command(&self) -> PrintCommand {
        match &self.program {
            Some(program) if !program.trim().is_empty() => PrintCommand {
                program: program.clone(),
                args: self.args.clone().unwrap_or_default(),
            },
            _ => {
                let mut command = PrintCommand::default();
                if let Some(args) = &self.args {
                    command.args = args.clone();
                }
                command
            }
        }
    }

    /// Resolves page geometry. Pages smaller than their padding fall back
    /// to the defaults.
    #[must_use]
    pub fn layout(&self) -> PrintLayout {
        let valid = |value: Option<f32>, default: f32| {
            value
                .filter(|v| v.is_finite() && *v > 2.0 * DEFAULT_PAGE_PADDING)
                .unwrap_or(default)
        };
        PrintLayout {
            page_width: valid(self.page_width, DEFAULT_PAGE_WIDTH),
            page_height: valid(self.page_height, DEFAULT_PAGE_HEIGHT),
            page_padding: DEFAULT_PAGE_PADDING,
            scale: self
                .scale
                .filter(|s| s.is_finite())
                .unwrap_or(DEFAULT_PRINT_SCALE)
                .clamp(MIN_PRINT_SCALE, MAX_PRINT_SCALE),
        }
    }

    /// `None` when no wait is configured.
    #[must_use]
    pub fn cleanup_delay(&self) -> Option<Duration> {
        let ms = self
            .cleanup_delay_ms
            .unwrap_or(DEFAULT_CLEANUP_DELAY_MS)
            .min(MAX_CLEANUP_DELAY_MS);
        (ms > 0).then(|| Duration::from_millis(ms))
    }
}

/// Toast settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub position: Option<Position>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub qr: QrConfig,

    #[serde(default)]
    pub print: PrintConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads `settings.toml` from `base_dir` or the resolved config directory.
///
/// A missing file yields the defaults silently. An unreadable file yields the
/// defaults plus the i18n key of a warning to show.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!("loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(e) => {
                    tracing::warn!("ignoring {}: {e}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
