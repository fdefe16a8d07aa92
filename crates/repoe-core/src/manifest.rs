//! The fixed set of RePoE files and where they come from.
//!
//! Each destination is a path relative to the working root; its last path
//! segment names the remote resource, which lives at `BASE_URL + name`.

use crate::error::SyncError;
use std::path::PathBuf;

/// Host serving the RePoE exports.
pub const BASE_URL: &str = "https://repoe-fork.github.io/";

/// Destinations refreshed by a sync, relative to the working root.
pub const DESTINATIONS: [&str; 4] = [
    "rust/domain/dist/base_items.min.json",
    "rust/domain/dist/stat_translations.min.json",
    "rust/domain/dist/stats.min.json",
    "rust/domain/dist/mods.min.json",
];

/// Returns the text after the last `/` of `destination`.
pub fn resource_name(destination: &str) -> Result<&str, SyncError> {
    let name = destination
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(destination);
    if name.is_empty() {
        return Err(SyncError::InvalidDestination(destination.to_string()));
    }
    Ok(name)
}

/// Plain concatenation; `base` is expected to end with `/`.
pub fn remote_url(base: &str, resource: &str) -> String {
    format!("{}{}", base, resource)
}

/// One destination with its derived resource name and remote address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub destination: PathBuf,
    pub resource: String,
    pub url: String,
}

/// Base URL plus destination list. Immutable once built.
#[derive(Debug, Clone)]
pub struct Manifest {
    base_url: String,
    destinations: Vec<String>,
}

impl Manifest {
    /// The compiled-in RePoE manifest.
    pub fn builtin() -> Self {
        Self::new(BASE_URL, DESTINATIONS)
    }

    pub fn new<I, S>(base_url: &str, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_url: base_url.to_string(),
            destinations: destinations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Resolves every destination. Fails on the first descriptor without a file name.
    pub fn entries(&self) -> Result<Vec<Entry>, SyncError> {
        self.destinations
            .iter()
            .map(|dest| {
                let resource = resource_name(dest)?;
                Ok(Entry {
                    destination: PathBuf::from(dest),
                    resource: resource.to_string(),
                    url: remote_url(&self.base_url, resource),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_name_is_last_segment() {
        assert_eq!(
            resource_name("rust/domain/dist/mods.min.json").unwrap(),
            "mods.min.json"
        );
        assert_eq!(resource_name("stats.min.json").unwrap(), "stats.min.json");
    }

    #[test]
    fn resource_name_rejects_trailing_slash() {
        assert!(matches!(
            resource_name("rust/domain/dist/"),
            Err(SyncError::InvalidDestination(_))
        ));
        assert!(resource_name("").is_err());
    }

    #[test]
    fn remote_url_concatenates() {
        assert_eq!(
            remote_url("https://example.test/", "mods.min.json"),
            "https://example.test/mods.min.json"
        );
    }

    #[test]
    fn builtin_entries() {
        let entries = Manifest::builtin().entries().unwrap();
        assert_eq!(entries.len(), 4);
        let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://repoe-fork.github.io/base_items.min.json",
                "https://repoe-fork.github.io/stat_translations.min.json",
                "https://repoe-fork.github.io/stats.min.json",
                "https://repoe-fork.github.io/mods.min.json",
            ]
        );
        assert_eq!(
            entries[3].destination,
            PathBuf::from("rust/domain/dist/mods.min.json")
        );
    }

    #[test]
    fn custom_manifest_uses_its_base() {
        let m = Manifest::new("https://example.test/", ["out/mods.min.json"]);
        let entries = m.entries().unwrap();
        assert_eq!(entries[0].resource, "mods.min.json");
        assert_eq!(entries[0].url, "https://example.test/mods.min.json");
        assert_eq!(m.base_url(), "https://example.test/");
        assert_eq!(m.len(), 1);
    }
}
