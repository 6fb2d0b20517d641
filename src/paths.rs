//! Path resolution for user-supplied arguments.
//!
//! Paths are made absolute against the working directory and normalised
//! lexically.  Nothing here touches the filesystem beyond asking for the
//! current directory, and symlinks are never resolved.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve `path` against the current working directory.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    Ok(absolutize_from(&cwd, path))
}

/// Resolve `path` against `base` and collapse `.` and `..` components.
///
/// `..` at the root stays at the root.
pub fn absolutize_from(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                out.pop();
            },
            other => out.push(other),
        }
    }
    out
}

// ─── Tests ────────────────────────────────────────────────────────────────────
