// SPDX-License-Identifier: MPL-2.0
//! Where BinQR keeps `settings.toml` (config dir) and the print spool
//! (data dir).
//!
//! Each directory is taken from the first source that has one: explicit
//! argument, `--config-dir`/`--data-dir`, `BINQR_CONFIG_DIR`/`BINQR_DATA_DIR`,
//! then the platform directory with `BinQR` appended.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "BinQR";
const SPOOL_DIR: &str = "spool";

pub const ENV_DATA_DIR: &str = "BINQR_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "BINQR_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--data-dir` and `--config-dir`. Later calls are ignored.
pub fn init_cli_overrides(data_dir: Option<PathBuf>, config_dir: Option<PathBuf>) {
    if CLI_DATA_DIR.set(data_dir).is_err() || CLI_CONFIG_DIR.set(config_dir).is_err() {
        tracing::warn!("CLI directory overrides already initialized");
    }
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env_value: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|dir| dir.join(APP_NAME)))
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_DATA_DIR.get().and_then(Clone::clone),
        std::env::var(ENV_DATA_DIR).ok(),
        dirs::data_dir(),
    )
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

/// Parent of the per-job spool folders. Uses the system temp dir when no
/// data dir can be found.
pub fn get_spool_dir_with_override(data_dir: Option<PathBuf>) -> PathBuf {
    get_app_data_dir_with_override(data_dir)
        .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
        .join(SPOOL_DIR)
}
