//! Retention pruning.
//!
//! After every backup run the destination is scanned for snapshot
//! directories and any whose encoded timestamp is strictly older than
//! `now - retention_days` is deleted.  A snapshot exactly `retention_days`
//! old is kept.
//!
//! Entries whose names do not parse as snapshots are never touched.  The
//! first deletion failure aborts the pass; later snapshots are left for the
//! next run.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime};

use crate::snapshot;

/// Oldest timestamp a snapshot may carry and still be kept.
///
/// Saturates to the earliest representable time when the window reaches
/// past it, so an enormous retention keeps everything.
pub fn cutoff(now: NaiveDateTime, retention_days: u32) -> NaiveDateTime {
    now.checked_sub_signed(Duration::days(i64::from(retention_days)))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Whether a snapshot taken at `taken` falls outside the window.
pub fn is_expired(taken: NaiveDateTime, cutoff: NaiveDateTime) -> bool {
    taken < cutoff
}

/// Remove expired snapshots under `destination`, returning the names of the
/// directories that were deleted, in the order they were removed.
///
/// Only directories are considered.  Entries are visited in name order,
/// which for snapshots is also chronological order.  A destination that does
/// not exist holds no snapshots.
pub fn prune(destination: &Path, retention_days: u32, now: NaiveDateTime) -> Result<Vec<String>> {
    let cutoff = cutoff(now, retention_days);

    let listing = match fs::read_dir(destination) {
        Ok(listing) => listing,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("listing {}", destination.display()));
        },
    };

    let mut entries = Vec::new();
    for entry in listing {
        let entry = entry.with_context(|| format!("listing {}", destination.display()))?;
        entries.push(entry);
    }
    entries.sort_by_key(fs::DirEntry::file_name);

    let mut removed = Vec::new();
    for entry in entries {
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        let Some(taken) = snapshot::parse_dir_name(&name) else {
            continue;
        };
        let is_dir = entry
            .file_type()
            .with_context(|| format!("inspecting {}", entry.path().display()))?
            .is_dir();
        if !is_dir || !is_expired(taken, cutoff) {
            continue;
        }

        let path = entry.path();
        fs::remove_dir_all(&path).with_context(|| format!("removing {}", path.display()))?;
        removed.push(name);
    }

    Ok(removed)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
