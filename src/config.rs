//! Configuration record and its load/save functions.
//!
//! `Config` is a direct 1-to-1 mapping of `backup_config.toml`.  The file is
//! the only state that survives between invocations, so every command loads
//! it, works on the value it gets back, and saves it again if it changed.
//!
//! # File format
//!
//! ```toml
//! sources        = ["/home/alice/docs", "/home/alice/photos"]
//! destination    = "/mnt/backups"   # "" = not set yet
//! retention_days = 7
//! ```
//!
//! All three keys are required and no other keys are allowed.  A file that
//! does not match this shape is a hard error; nothing is guessed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ─── Record ───────────────────────────────────────────────────────────────────

/// The persisted backup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Absolute paths to back up, in the order they were added.
    pub sources: Vec<PathBuf>,

    /// Absolute path snapshots are written under.  Empty when not set.
    pub destination: PathBuf,

    /// Snapshots strictly older than this many days are removed after a
    /// backup run.
    pub retention_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: vec![],
            destination: PathBuf::new(),
            retention_days: default_retention_days(),
        }
    }
}

impl Config {
    /// The destination directory, or `None` if it has never been set.
    pub fn destination(&self) -> Option<&Path> {
        if self.destination.as_os_str().is_empty() {
            None
        } else {
            Some(&self.destination)
        }
    }

    /// Append `path` to the source list unless it is already there.
    ///
    /// Returns `true` if the list changed.
    pub fn add_source(&mut self, path: PathBuf) -> bool {
        if self.sources.contains(&path) {
            return false;
        }
        self.sources.push(path);
        true
    }

    /// Whether a backup has everything it needs: at least one source and a
    /// destination.
    pub fn is_ready(&self) -> bool {
        !self.sources.is_empty() && self.destination().is_some()
    }
}

const fn default_retention_days() -> u32 {
    7
}

// ─── Load / save ──────────────────────────────────────────────────────────────

/// Read and parse a `Config` from `path`.
///
/// If the file does not exist, a default record is written to `path` and
/// returned.  Returns an error if the file exists but cannot be read or does
/// not have the expected shape.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        let cfg = Config::default();
        save(path, &cfg)?;
        return Ok(cfg);
    }

    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Serialise `cfg` and overwrite the file at `path`.
pub fn save(path: &Path, cfg: &Config) -> Result<()> {
    let text = toml::to_string_pretty(cfg)
        .with_context(|| format!("serialising config for {}", path.display()))?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
