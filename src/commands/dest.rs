//! `dirsnap dest <path>` — set the destination directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    config::{self, Config},
    paths, ui,
};

/// Create `path` (and any missing parents), store it as the destination and
/// persist the config.  An existing directory is fine; a permission or I/O
/// failure is not.
pub fn run(config_path: &Path, cfg: &mut Config, path: &Path) -> Result<PathBuf> {
    let path = paths::absolutize(path)?;
    std::fs::create_dir_all(&path).with_context(|| format!("creating {}", path.display()))?;

    cfg.destination = path.clone();
    config::save(config_path, cfg)?;
    ui::done(&format!("Backup destination set to {}", path.display()));
    Ok(path)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
