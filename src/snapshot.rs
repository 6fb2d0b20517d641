//! Snapshot naming and the recursive copy that fills a snapshot.
//!
//! A snapshot is a directory directly under the destination named
//! `backup_<YYYYMMDD_HHMM>`, using local wall-clock time.  It holds one copy
//! per source, named after the source's final path component:
//!
//! ```text
//! /mnt/backups/
//! └── backup_20240315_0930/
//!     ├── docs/…
//!     └── photos/…
//! ```
//!
//! Timestamps have minute resolution.  Two runs inside the same minute pick
//! the same snapshot directory, and the second one fails with
//! [`CopyError::TargetExists`] on its first source.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use thiserror::Error;
use walkdir::WalkDir;

/// Name prefix shared by every snapshot directory.
pub const PREFIX: &str = "backup_";

/// `chrono` format of the timestamp that follows [`PREFIX`].
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

// ─── Naming ───────────────────────────────────────────────────────────────────

/// Directory name for a snapshot taken at `now`.
pub fn dir_name(now: NaiveDateTime) -> String {
    format!("{PREFIX}{}", now.format(TIMESTAMP_FORMAT))
}

/// Timestamp encoded in a snapshot directory name.
///
/// Returns `None` for anything that is not exactly `backup_` followed by a
/// valid `YYYYMMDD_HHMM` stamp, so foreign directories are left alone.
pub fn parse_dir_name(name: &str) -> Option<NaiveDateTime> {
    let stamp = name.strip_prefix(PREFIX)?;
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()
}

// ─── Copy ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("{} already exists, refusing to overwrite it", .0.display())]
    TargetExists(PathBuf),

    #[error("walking {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("copying {} to {}", from.display(), to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Recursively copy `source` to `target`, returning the number of files
/// copied.
///
/// `target` must not exist yet; its parent directories are created as
/// needed.  Symlinks are followed and their contents copied.  A `source`
/// that is a plain file is copied to `target` as a file.  Sockets, FIFOs and
/// device nodes are skipped.
pub fn copy_tree(source: &Path, target: &Path) -> Result<u64, CopyError> {
    if target.exists() {
        return Err(CopyError::TargetExists(target.to_path_buf()));
    }

    let mut files = 0;
    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| CopyError::Walk {
            path: source.to_path_buf(),
            source: e,
        })?;

        let Ok(rel) = entry.path().strip_prefix(source) else {
            continue;
        };
        let dest = if rel.as_os_str().is_empty() {
            target.to_path_buf()
        } else {
            target.join(rel)
        };

        let io_err = |e| CopyError::Io {
            from: entry.path().to_path_buf(),
            to: dest.clone(),
            source: e,
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&dest).map_err(io_err)?;
        } else if file_type.is_file() {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
            fs::copy(entry.path(), &dest).map_err(io_err)?;
            files += 1;
        }
    }

    Ok(files)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
