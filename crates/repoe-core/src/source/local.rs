//! Local RePoE data directory (e.g. `../RePoE/RePoE/data`).

use super::{Fetched, Source};
use crate::error::SyncError;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalSource {
    dir: PathBuf,
}

impl LocalSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Source for LocalSource {
    fn fetch(&self, resource: &str) -> Result<Fetched, SyncError> {
        let path = self.dir.join(resource);
        let body = fs::read(&path).map_err(|source| SyncError::LocalRead {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("read {} ({} bytes)", path.display(), body.len());
        Ok(Fetched { body, status: None })
    }

    fn locate(&self, resource: &str) -> String {
        self.dir.join(resource).display().to_string()
    }
}
