//! Destination file writes.
//!
//! Create-or-truncate, then write the whole body. There is no temp file and
//! no rename: an interrupted write leaves a truncated destination.

use crate::error::SyncError;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Writes `body` to `path`, replacing any previous content. Returns bytes written.
///
/// With `create_parents` false a missing parent directory is an error.
pub fn write_destination(path: &Path, body: &[u8], create_parents: bool) -> Result<u64, SyncError> {
    let write_err = |source: std::io::Error| SyncError::Write {
        path: path.to_path_buf(),
        source,
    };

    if create_parents {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(body).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(body.len() as u64)
}
