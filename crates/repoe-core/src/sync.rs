//! The fetch/write pass over a manifest.
//!
//! Sequential and fail-fast: each body is fetched completely before its
//! destination is opened, and the first error ends the pass. Destinations
//! already written stay written; later ones are not touched.

use crate::error::SyncError;
use crate::manifest::Manifest;
use crate::source::{is_success_status, Source};
use crate::writer::write_destination;
use std::path::{Path, PathBuf};

/// Options for a sync pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Create missing parent directories of destinations.
    pub create_parents: bool,
}

/// One written destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedFile {
    pub destination: PathBuf,
    /// URL or source path the body came from.
    pub origin: String,
    pub bytes: u64,
    pub status: Option<u32>,
}

/// Outcome of a completed pass, in manifest order.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub files: Vec<SyncedFile>,
}

impl SyncReport {
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }

    /// Files whose HTTP status was outside 2xx (written anyway).
    pub fn non_success(&self) -> impl Iterator<Item = &SyncedFile> {
        self.files
            .iter()
            .filter(|f| !is_success_status(f.status))
    }
}

/// Fetches every manifest entry from `source` and writes it under `root`.
pub fn run_sync(
    manifest: &Manifest,
    source: &dyn Source,
    root: &Path,
    options: SyncOptions,
) -> Result<SyncReport, SyncError> {
    let entries = manifest.entries()?;
    let mut report = SyncReport::default();

    for entry in entries {
        let origin = source.locate(&entry.resource);
        let path = root.join(&entry.destination);
        tracing::info!("fetching {} -> {}", origin, path.display());

        let fetched = source.fetch(&entry.resource)?;
        let bytes = write_destination(&path, &fetched.body, options.create_parents)?;
        tracing::info!("wrote {} bytes to {}", bytes, path.display());

        report.files.push(SyncedFile {
            destination: entry.destination,
            origin,
            bytes,
            status: fetched.status,
        });
    }

    Ok(report)
}
