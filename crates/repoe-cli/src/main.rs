use clap::Parser;
use repoe_core::{config, logging};

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("repoe-fetch error: {:#}", err);
            std::process::exit(1);
        }
    };

    // Initialize logging before any I/O; fall back to stderr if the state dir is unusable.
    if logging::init_logging(cfg.log_filter.as_deref()).is_err() {
        logging::init_logging_stderr(cfg.log_filter.as_deref());
    }

    if let Err(err) = cli.run(&cfg) {
        tracing::error!("{:#}", err);
        eprintln!("repoe-fetch error: {:#}", err);
        std::process::exit(1);
    }
}
