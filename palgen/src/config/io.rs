//! Configuration file I/O: path resolution and loading.

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};

use super::Config;

/// Returns the configuration directory for `palgen`.
fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("palgen");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config").join("palgen");
    }
    PathBuf::from(".").join("palgen")
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns pywal's cache directory, where `colors.json` is read from and
/// the headers are written to by default.
pub fn cache_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        return PathBuf::from(xdg).join("wal");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".cache").join("wal");
    }
    PathBuf::from(".").join("wal")
}

impl Config {
    /// Loads config from `explicit`, or from the default path.
    ///
    /// A missing file at the default path yields defaults; a missing
    /// explicit file, an unreadable file or invalid TOML is an error.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = explicit.map_or_else(config_path, Path::to_path_buf);
        let data = match std::fs::read_to_string(&path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
                debug!("config: {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        let cfg = toml::from_str(&data)
            .with_context(|| format!("parse error in {}", path.display()))?;
        info!("config: loaded from {}", path.display());
        Ok(cfg)
    }
}
