// SPDX-License-Identifier: MPL-2.0
//! Temporary page files handed to the print command.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the pages of one print job.
///
/// It is removed by [`SpoolDir::cleanup`] once the print command is done.
#[derive(Debug)]
pub struct SpoolDir {
    path: PathBuf,
}

impl SpoolDir {
    /// Creates `root/session`, including missing parents.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn create(root: &Path, session: &str) -> Result<Self> {
        let path = root.join(session);
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes page `number` (1-based) and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn write_page(&self, number: usize, png: &[u8]) -> Result<PathBuf> {
        let file = self.path.join(format!("page-{number:03}.png"));
        fs::write(&file, png)?;
        Ok(file)
    }

    /// Removes the directory and everything in it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if removal fails.
    pub fn cleanup(self) -> Result<()> {
        if self.path.exists() {
            fs::remove_dir_all(&self.path)?;
        }
        Ok(())
    }
}

/// Unique-enough name for a print session directory.
#[must_use]
pub fn session_name() -> String {
    format!(
        "print-{}-{}",
        chrono::Local::now().format("%Y%m%d-%H%M%S-%3f"),
        std::process::id()
    )
}
