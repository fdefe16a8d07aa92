//! Local state of the manifest's destinations (size and SHA-256).
//!
//! Read-only; nothing here talks to the remote.

use crate::manifest::Manifest;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

const BUF_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub destination: PathBuf,
    pub url: String,
    /// `None` when the destination does not exist.
    pub size: Option<u64>,
    pub sha256: Option<String>,
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Describes every destination of `manifest` as found under `root`.
pub fn local_status(manifest: &Manifest, root: &Path) -> Result<Vec<LocalFile>> {
    let mut out = Vec::with_capacity(manifest.len());
    for entry in manifest.entries()? {
        let path = root.join(&entry.destination);
        let (size, sha256) = match std::fs::metadata(&path) {
            Ok(meta) => (Some(meta.len()), Some(sha256_path(&path)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => (None, None),
            Err(e) => {
                return Err(e).with_context(|| format!("stat {}", path.display()));
            }
        };
        out.push(LocalFile {
            destination: entry.destination,
            url: entry.url,
            size,
            sha256,
        });
    }
    Ok(out)
}
