//! `repoe-fetch status` – show the local copies.

use anyhow::Result;
use repoe_core::status::local_status;
use repoe_core::Manifest;
use std::io::Write;
use std::path::Path;

pub fn run_status(root: &Path, out: &mut impl Write) -> Result<()> {
    let files = local_status(&Manifest::builtin(), root)?;
    writeln!(out, "{:<10} {:<64} {}", "SIZE", "SHA256", "PATH")?;
    for f in files {
        let size = f
            .size
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<10} {:<64} {}",
            size,
            f.sha256.as_deref().unwrap_or("-"),
            f.destination.display()
        )?;
    }
    Ok(())
}
