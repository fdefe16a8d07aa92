//! Where file bodies come from.
//!
//! `HttpSource` issues one GET per resource against the manifest's base URL;
//! `LocalSource` reads the same names out of a local RePoE data checkout.

mod http;
mod local;

pub use http::HttpSource;
pub use local::LocalSource;

use crate::error::SyncError;

/// True for 2xx statuses and for sources that report no status.
pub fn is_success_status(status: Option<u32>) -> bool {
    status.map_or(true, |code| (200..300).contains(&code))
}

/// A fetched body, kept whole in memory until it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub body: Vec<u8>,
    /// HTTP status of the response; `None` for non-HTTP sources.
    pub status: Option<u32>,
}

impl Fetched {
    pub fn is_success(&self) -> bool {
        is_success_status(self.status)
    }
}

/// Resolves a resource name to its bytes.
pub trait Source {
    fn fetch(&self, resource: &str) -> Result<Fetched, SyncError>;

    /// Human-readable origin of `resource` (URL or file path), for logs and reports.
    fn locate(&self, resource: &str) -> String;
}
