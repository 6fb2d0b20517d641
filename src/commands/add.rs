//! `dirsnap add <path>` — register a source directory.
//!
//! The path is made absolute before anything else, so `add docs` and
//! `add ./docs` from the same directory register the same source.  Paths that
//! do not exist, or are already registered, are ignored without a message.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    config::{self, Config},
    paths, ui,
};

/// Register `path` and persist the config if it changed.
///
/// Returns the absolute path that was added, or `None` if nothing changed.
pub fn run(config_path: &Path, cfg: &mut Config, path: &Path) -> Result<Option<PathBuf>> {
    let path = paths::absolutize(path)?;
    if !path.exists() || !cfg.add_source(path.clone()) {
        return Ok(None);
    }

    config::save(config_path, cfg)?;
    ui::done(&format!("Added {} to backup list", path.display()));
    Ok(Some(path))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
