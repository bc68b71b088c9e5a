// SPDX-License-Identifier: MPL-2.0
//! Printing of the rendered label list.
//!
//! A print job captures the codes already drawn on screen, lays them out on
//! fixed-size pages, rasterizes each page and hands the files to the platform
//! print command. The spool directory is removed once the command exits,
//! whether it succeeded or not.

pub mod command;
pub mod document;
pub mod layout;
pub mod raster;
pub mod sheet;
pub mod spool;

pub use command::{PrintCommand, FILE_PLACEHOLDER};
pub use layout::{Page, Placement, PrintLayout};
pub use raster::PageRasterizer;
pub use sheet::{PrintItem, PrintSheet};
pub use spool::SpoolDir;

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Everything needed to print one sheet.
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub sheet: PrintSheet,
    pub layout: PrintLayout,
    pub command: PrintCommand,
    /// Parent of the per-job spool directory.
    pub spool_root: PathBuf,
    /// Extra wait after the command exits, for spoolers that read lazily.
    pub cleanup_delay: Option<Duration>,
}

/// Outcome of a finished print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintReceipt {
    pub pages: usize,
    pub items: usize,
}

/// Renders, spools and prints `job`.
///
/// # Errors
///
/// Returns an error if a page cannot be rendered or written, or if the print
/// command fails. Spooled files are removed in every case.
pub async fn submit(job: PrintJob) -> Result<PrintReceipt> {
    let items = job.sheet.len();
    let PrintJob {
        sheet,
        layout,
        command,
        spool_root,
        cleanup_delay,
    } = job;

    let spool = SpoolDir::create(&spool_root, &spool::session_name())?;
    tracing::info!(items, spool = %spool.path().display(), "print job started");

    let outcome = run_job(&spool, sheet, layout, &command).await;

    if let Some(delay) = cleanup_delay.filter(|d| !d.is_zero()) {
        tokio::time::sleep(delay).await;
    }
    if let Err(e) = spool.cleanup() {
        tracing::warn!("failed to remove print spool: {e}");
    }

    match outcome {
        Ok(pages) => {
            tracing::info!(pages, items, "print job finished");
            Ok(PrintReceipt { pages, items })
        }
        Err(e) => {
            tracing::error!("print job failed: {e}");
            Err(e)
        }
    }
}

async fn run_job(
    spool: &SpoolDir,
    sheet: PrintSheet,
    layout: PrintLayout,
    command: &PrintCommand,
) -> Result<usize> {
    let pages = tokio::task::spawn_blocking(move || rasterize(&sheet, &layout))
        .await
        .map_err(|e| Error::Print(format!("page rendering task failed: {e}")))??;

    let files = pages
        .iter()
        .enumerate()
        .map(|(i, png)| spool.write_page(i + 1, png))
        .collect::<Result<Vec<_>>>()?;

    command.run(&files).await?;
    Ok(files.len())
}

fn rasterize(sheet: &PrintSheet, layout: &PrintLayout) -> Result<Vec<Vec<u8>>> {
    let rasterizer = PageRasterizer::new();
    document::render_pages(sheet, layout)?
        .iter()
        .map(|svg| rasterizer.render_png(svg, layout.scale))
        .collect()
}
