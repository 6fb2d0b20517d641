//! Subcommand handlers.
//!
//! Each file in this module corresponds to one user-facing command:
//!
//! | File         | Invocation              | Description                          |
//! |--------------|-------------------------|--------------------------------------|
//! | `add.rs`     | `dirsnap add <path>`    | Register a source directory          |
//! | `dest.rs`    | `dirsnap dest <path>`   | Set (and create) the destination     |
//! | `backup.rs`  | `dirsnap backup`        | Snapshot every source, then prune    |
//! | `list.rs`    | `dirsnap list`          | Print the configuration              |

pub mod add;
pub mod backup;
pub mod dest;
pub mod list;
