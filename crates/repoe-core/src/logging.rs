//! Tracing setup for `repoe-fetch`.
//!
//! Events go to `repoe-fetch.log` in the XDG state dir so the console only
//! carries the per-file summary; stderr is used when no log file can be opened.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,repoe_core=debug,repoe_fetch=debug";

/// Per-event sink: the shared log file, or stderr once the handle can no longer be duplicated.
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// `RUST_LOG` wins; otherwise `default` (from config) or the built-in filter.
fn env_filter(default: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Appends to `~/.local/state/repoe-fetch/repoe-fetch.log` and returns its path.
///
/// Errors when the state dir or file is unusable; `main` then calls [`init_logging_stderr`].
pub fn init_logging(default_filter: Option<&str>) -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("repoe-fetch")?;
    let log_dir = xdg_dirs.get_state_home().join("repoe-fetch");

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("repoe-fetch.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    // One handle per event, cloned from the opened log file.
    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = FileOrStderr;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(FileOrStderr::File)
                .unwrap_or(FileOrStderr::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::info!("repoe-fetch logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}

/// Console-only fallback with the same filter rules.
pub fn init_logging_stderr(default_filter: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_fallback_tolerates_repeat_init() {
        init_logging_stderr(Some("warn"));
        init_logging_stderr(None);
        tracing::warn!("still logging after second init");
    }
}
