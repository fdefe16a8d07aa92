pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod source;
pub mod status;
pub mod sync;
pub mod writer;

pub use error::SyncError;
pub use manifest::{Entry, Manifest, BASE_URL, DESTINATIONS};
pub use source::{Fetched, HttpSource, LocalSource, Source};
pub use sync::{run_sync, SyncOptions, SyncReport, SyncedFile};
