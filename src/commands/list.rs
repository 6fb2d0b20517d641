//! `dirsnap list` — show the current configuration.

use crate::config::Config;

/// Print the registered sources and the destination.
pub fn run(cfg: &Config) {
    println!("{}", render(cfg));
}

/// The `list` output as plain text.
pub fn render(cfg: &Config) -> String {
    let mut out = String::from("Backup dirs:");
    for source in &cfg.sources {
        out.push_str(&format!("\n- {}", source.display()));
    }
    out.push_str(&format!("\n\nDestination: {}", cfg.destination.display()));
    out
}

// ─── Tests ────────────────────────────────────────────────────────────────────
