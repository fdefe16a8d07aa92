//! `repoe-fetch sync` – download every file from the RePoE host.

use anyhow::Result;
use repoe_core::{run_sync as sync_all, HttpSource, Manifest, SyncOptions, SyncReport};
use std::path::Path;

pub fn run_sync(root: &Path, create_parents: bool) -> Result<()> {
    let manifest = Manifest::builtin();
    let source = HttpSource::new(manifest.base_url());
    let report = sync_all(&manifest, &source, root, SyncOptions { create_parents })?;
    print_report(&report);
    Ok(())
}

pub(super) fn print_report(report: &SyncReport) {
    for f in &report.files {
        let status = f
            .status
            .map(|code| format!("HTTP {code}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:>10}  {}",
            status,
            f.bytes,
            f.destination.display()
        );
    }
    for f in report.non_success() {
        eprintln!(
            "warning: {} answered HTTP {}; body written as served",
            f.origin,
            f.status.unwrap_or_default()
        );
    }
}
