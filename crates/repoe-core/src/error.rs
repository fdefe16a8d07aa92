//! Error type for the fetch/write pass.

use std::path::PathBuf;

/// Failure of a single destination during a sync. The pass stops at the first one.
///
/// A non-2xx HTTP status is not represented here: the body is written as served.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Destination descriptor has no final path segment (e.g. ends with `/`).
    #[error("destination {0:?} has no file name")]
    InvalidDestination(String),

    /// `base_url + basename` did not parse as a URL.
    #[error("invalid remote URL {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport failure reported by curl (DNS, connection refused, TLS, ...).
    #[error("GET {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Resource missing or unreadable in a local data directory.
    #[error("failed to read {}", path.display())]
    LocalRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination could not be opened or written (missing parent, permissions, disk full).
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
