use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings from `~/.config/repoe-fetch/config.toml`.
///
/// Only ambient behavior lives here; the base URL and destinations are compiled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoeConfig {
    /// Create missing parent directories when syncing (default: fail like a plain open).
    #[serde(default)]
    pub create_parent_dirs: bool,
    /// Default tracing filter when `RUST_LOG` is unset (e.g. "info,repoe_core=trace").
    #[serde(default)]
    pub log_filter: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("repoe-fetch")?;
    Ok(xdg_dirs.get_config_home().join("repoe-fetch").join("config.toml"))
}

/// Load configuration from the XDG config dir. A missing file yields defaults and is not created.
pub fn load() -> Result<RepoeConfig> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<RepoeConfig> {
    if !path.exists() {
        return Ok(RepoeConfig::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RepoeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
