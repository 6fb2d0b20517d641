//! `dirsnap` — copy directories into timestamped snapshots.
//!
//! # Overview
//!
//! A small personal backup tool.  Register the directories you care about,
//! point it at a destination, and every `dirsnap backup` copies them into a
//! fresh `backup_<YYYYMMDD_HHMM>` directory and deletes snapshots older than
//! the retention window.
//!
//! # Usage
//!
//! ```text
//! dirsnap add ~/docs          # register a source
//! dirsnap dest /mnt/backups   # set (and create) the destination
//! dirsnap backup              # snapshot + prune
//! dirsnap list                # show the configuration
//! dirsnap -c other.toml list  # use a config file other than ./backup_config.toml
//! ```
//!
//! # Module layout
//!
//! | Module                   | Responsibility                              |
//! |--------------------------|---------------------------------------------|
//! | [`cli`]                  | Argument types parsed by clap               |
//! | [`config`]               | `Config` record + TOML load/save            |
//! | [`paths`]                | Absolute path resolution                    |
//! | [`snapshot`]             | Snapshot naming and recursive copy          |
//! | [`retention`]            | Pruning of expired snapshots                |
//! | [`ui`]                   | Spinner and status lines                    |
//! | [`commands`]             | One handler per verb                        |

mod cli;
mod commands;
mod config;
mod paths;
mod retention;
mod snapshot;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Subcommand};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(&cli.config)?;

    match &cli.command {
        Subcommand::Add { path } => {
            if let Some(path) = path {
                commands::add::run(&cli.config, &mut cfg, path)?;
            }
        },
        Subcommand::Dest { path } => {
            if let Some(path) = path {
                commands::dest::run(&cli.config, &mut cfg, path)?;
            }
        },
        Subcommand::Backup => {
            let outcome = commands::backup::run(&cfg, chrono::Local::now().naive_local())?;
            if let commands::backup::Outcome::Completed {
                snapshot,
                backed_up,
                removed,
            } = outcome
            {
                ui::print_summary(&snapshot, backed_up.len(), removed.len());
            }
        },
        Subcommand::List => commands::list::run(&cfg),
    }

    Ok(())
}
