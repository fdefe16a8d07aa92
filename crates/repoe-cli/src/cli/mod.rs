//! CLI for refreshing the RePoE data files.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use repoe_core::config::RepoeConfig;
use std::path::{Path, PathBuf};

use commands::{run_copy, run_list, run_status, run_sync};

/// Top-level CLI. With no subcommand, downloads every file (same as `sync`).
#[derive(Debug, Parser)]
#[command(name = "repoe-fetch", version)]
#[command(about = "Refresh the RePoE data files under rust/domain/dist", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every file from the RePoE host (the default).
    Sync {
        /// Create missing parent directories of the destinations.
        #[arg(long)]
        create_dirs: bool,
    },

    /// Copy the files from a local RePoE data directory instead of downloading.
    Copy {
        /// Directory holding the exported files (e.g. ../RePoE/RePoE/data).
        dir: PathBuf,
    },

    /// Print each destination and the URL it is fetched from.
    List,

    /// Show size and SHA-256 of the local copies.
    Status,
}

impl Cli {
    pub fn run(self, cfg: &RepoeConfig) -> Result<()> {
        tracing::debug!("loaded config: {:?}", cfg);
        let root = std::env::current_dir().context("resolve working directory")?;
        self.run_in(&root, cfg)
    }

    /// Dispatches with destinations resolved under `root`.
    pub(crate) fn run_in(self, root: &Path, cfg: &RepoeConfig) -> Result<()> {
        match self.command {
            None => run_sync(root, create_parents(false, cfg))?,
            Some(CliCommand::Sync { create_dirs }) => {
                run_sync(root, create_parents(create_dirs, cfg))?
            }
            Some(CliCommand::Copy { dir }) => run_copy(root, &dir)?,
            Some(CliCommand::List) => run_list(&mut std::io::stdout().lock())?,
            Some(CliCommand::Status) => run_status(root, &mut std::io::stdout().lock())?,
        }

        Ok(())
    }
}

/// `--create-dirs` or `create_parent_dirs = true` in the config file.
fn create_parents(flag: bool, cfg: &RepoeConfig) -> bool {
    flag || cfg.create_parent_dirs
}
