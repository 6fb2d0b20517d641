//! `dirsnap backup` — copy every source into a new snapshot, then prune.
//!
//! # Steps
//!
//! | # | Step    | Description                                             |
//! |---|---------|---------------------------------------------------------|
//! | 1 | Check   | Sources and destination must both be configured        |
//! | 2 | Copy    | Each existing source → `<dest>/backup_<ts>/<basename>` |
//! | 3 | Prune   | Remove snapshots older than the retention window        |
//!
//! Sources that no longer exist are skipped silently; a partial snapshot is
//! better than none.  Any other failure stops the run where it is, including
//! the prune step.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::{config::Config, retention, snapshot, ui};

pub const NOT_CONFIGURED: &str = "Please configure backup directories and destination first";

/// What a backup run did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Sources or destination missing; nothing was touched.
    NotConfigured,

    Completed {
        /// The snapshot directory for this run.  It is only created if at
        /// least one source was copied.
        snapshot: PathBuf,
        /// Sources copied, in config order.
        backed_up: Vec<PathBuf>,
        /// Snapshot directory names removed by the retention pass.
        removed: Vec<String>,
    },
}

/// Execute a backup run stamped with `now`.
pub fn run(cfg: &Config, now: NaiveDateTime) -> Result<Outcome> {
    let destination = match cfg.destination() {
        Some(d) if cfg.is_ready() => d,
        _ => {
            ui::notice(NOT_CONFIGURED);
            return Ok(Outcome::NotConfigured);
        },
    };

    let snapshot_dir = destination.join(snapshot::dir_name(now));

    let mut backed_up = Vec::new();
    for source in &cfg.sources {
        if !source.exists() {
            continue;
        }
        let target = snapshot_dir.join(base_name(source)?);
        let files = ui::with_spinner(&format!("Copying {}", source.display()), || {
            snapshot::copy_tree(source, &target)
        })
        .with_context(|| format!("backing up {}", source.display()))?;

        ui::done(&backed_up_line(source, files));
        backed_up.push(source.clone());
    }

    let removed = retention::prune(destination, cfg.retention_days, now)?;
    for name in &removed {
        ui::removed(name);
    }

    Ok(Outcome::Completed {
        snapshot: snapshot_dir,
        backed_up,
        removed,
    })
}

fn backed_up_line(source: &Path, files: u64) -> String {
    match files {
        1 => format!("Backed up {} (1 file)", source.display()),
        n => format!("Backed up {} ({n} files)", source.display()),
    }
}

/// Final path component of `source`, used as its directory name inside the
/// snapshot.
fn base_name(source: &Path) -> Result<&std::ffi::OsStr> {
    source
        .file_name()
        .with_context(|| format!("{} has no final path component", source.display()))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
