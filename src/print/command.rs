// SPDX-License-Identifier: MPL-2.0
//! Platform print command.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Argument placeholder replaced by one page file.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// External program that sends page files to the printer.
///
/// When an argument contains [`FILE_PLACEHOLDER`] the program runs once per
/// page; otherwise it runs once with every page appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for PrintCommand {
    #[cfg(windows)]
    fn default() -> Self {
        Self {
            program: "mspaint".to_string(),
            args: vec!["/p".to_string(), FILE_PLACEHOLDER.to_string()],
        }
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self {
            program: "lp".to_string(),
            args: vec!["-o".to_string(), "fit-to-page".to_string()],
        }
    }
}

impl PrintCommand {
    fn is_per_file(&self) -> bool {
        self.args.iter().any(|arg| arg.contains(FILE_PLACEHOLDER))
    }

    /// Argument lists, one per program run.
    #[must_use]
    pub fn invocations(&self, files: &[PathBuf]) -> Vec<Vec<OsString>> {
        if self.is_per_file() {
            files
                .iter()
                .map(|file| {
                    let file = file.to_string_lossy();
                    self.args
                        .iter()
                        .map(|arg| OsString::from(arg.replace(FILE_PLACEHOLDER, &file)))
                        .collect()
                })
                .collect()
        } else {
            let argv = self
                .args
                .iter()
                .map(OsString::from)
                .chain(files.iter().map(|file| file.clone().into_os_string()))
                .collect();
            vec![argv]
        }
    }

    /// Runs the program and waits for every run to exit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Print`] if the program cannot start or exits with a
    /// failure status.
    pub async fn run(&self, files: &[PathBuf]) -> Result<()> {
        for argv in self.invocations(files) {
            tracing::debug!(program = %self.program, ?argv, "running print command");
            let status = tokio::process::Command::new(&self.program)
                .args(&argv)
                .status()
                .await
                .map_err(|e| Error::Print(format!("cannot start {}: {}", self.program, e)))?;
            if !status.success() {
                return Err(Error::Print(format!(
                    "{} exited with {}",
                    self.program, status
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<PathBuf> {
        vec![PathBuf::from("/tmp/page-001.png"), PathBuf::from("/tmp/page-002.png")]
    }

    #[test]
    fn files_are_appended_without_placeholder() {
        let command = PrintCommand {
            program: "lp".into(),
            args: vec!["-o".into(), "fit-to-page".into()],
        };
        let runs = command.invocations(&files());
        assert_eq!(runs.len(), 1);
        assert_eq!(
            runs[0],
            vec![
                OsString::from("-o"),
                OsString::from("fit-to-page"),
                OsString::from("/tmp/page-001.png"),
                OsString::from("/tmp/page-002.png"),
            ]
        );
    }

    #[test]
    fn placeholder_runs_once_per_file() {
        let command = PrintCommand {
            program: "mspaint".into(),
            args: vec!["/p".into(), FILE_PLACEHOLDER.into()],
        };
        let runs = command.invocations(&files());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1][1], OsString::from("/tmp/page-002.png"));
    }

    #[test]
    fn placeholder_inside_argument_is_substituted() {
        let command = PrintCommand {
            program: "print".into(),
            args: vec!["--input={file}".into()],
        };
        let runs = command.invocations(&files()[..1]);
        assert_eq!(runs[0][0], OsString::from("--input=/tmp/page-001.png"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_program_is_reported() {
        let command = PrintCommand {
            program: "false".into(),
            args: Vec::new(),
        };
        let err = command.run(&files()).await.unwrap_err();
        assert!(matches!(err, Error::Print(_)));
    }

    #[tokio::test]
    async fn missing_program_is_reported() {
        let command = PrintCommand {
            program: "binqr-no-such-print-program".into(),
            args: Vec::new(),
        };
        let err = command.run(&files()).await.unwrap_err();
        assert!(matches!(err, Error::Print(message) if message.contains("cannot start")));
    }
}
