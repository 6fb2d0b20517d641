//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  The `Cli` struct is parsed once in `main` and the
//! selected [`Subcommand`] is dispatched from there.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name    = "dirsnap",
    about   = "Copy directories into timestamped snapshots and prune old ones",
    version,
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Cli {
    /// Path to the configuration file.
    ///
    /// Defaults to `backup_config.toml` in the current working directory.
    /// The file is created with default values the first time it is needed.
    #[arg(short, long, global = true, default_value = "backup_config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Subcommand,
}

/// The four verbs.
#[derive(clap::Subcommand, Debug, PartialEq)]
pub enum Subcommand {
    /// Register a directory to be included in every backup.
    ///
    /// Paths that do not exist, or that are already registered, are ignored.
    Add {
        /// Directory to add (resolved to an absolute path).
        path: Option<PathBuf>,
    },

    /// Set the directory snapshots are written to, creating it if needed.
    Dest {
        /// Destination directory (resolved to an absolute path).
        path: Option<PathBuf>,
    },

    /// Copy every registered source into a new snapshot, then prune old ones.
    Backup,

    /// Show the registered sources and the destination.
    List,
}

// ─── Tests ────────────────────────────────────────────────────────────────────
