//! `repoe-fetch copy <DIR>` – populate the destinations from a local RePoE checkout.

use anyhow::{Context, Result};
use repoe_core::{run_sync, LocalSource, Manifest, SyncOptions};
use std::path::Path;

use super::sync::print_report;

pub fn run_copy(root: &Path, dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }
    let manifest = Manifest::builtin();
    let source = LocalSource::new(dir);
    // Local copies always create the dist directory.
    let opts = SyncOptions {
        create_parents: true,
    };
    let report = run_sync(&manifest, &source, root, opts)
        .with_context(|| format!("copy from {}", dir.display()))?;
    print_report(&report);
    Ok(())
}
