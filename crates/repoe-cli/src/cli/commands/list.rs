//! `repoe-fetch list` – show where each file comes from.

use anyhow::Result;
use repoe_core::Manifest;
use std::io::Write;

pub fn run_list(out: &mut impl Write) -> Result<()> {
    for entry in Manifest::builtin().entries()? {
        writeln!(out, "{}  {}", entry.destination.display(), entry.url)?;
    }
    Ok(())
}
