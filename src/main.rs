// SPDX-License-Identifier: MPL-2.0
use binqr::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "BINQR_LOG";

const HELP: &str = "\
BinQR - print QR labels for BIN identifiers

USAGE:
  binqr [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory for temporary print files
  --i18n-dir <dir>     Directory of .ftl files overriding the built-in ones
  -h, --help           Print this help

ENVIRONMENT:
  BINQR_CONFIG_DIR, BINQR_DATA_DIR, BINQR_LOG (default: info)
";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str::<_, PathBuf>("--i18n-dir")?,
        data_dir: args.opt_value_from_str::<_, PathBuf>("--data-dir")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
