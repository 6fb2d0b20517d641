//! Terminal output — spinners and one-line status messages.
//!
//! Every line the tool prints goes through here so the styling stays
//! consistent.  `console` drops the colour codes automatically when stdout is
//! not a terminal, and `indicatif` hides spinners in the same situation, so
//! piped output and test captures see plain text.

use std::{path::Path, time::Duration};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

// ─── Icons ───────────────────────────────────────────────────────────────────

/// Braille spinner frames — same style as indicatif's default.
static SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Green ✓ — a change was made.
fn icon_ok() -> console::StyledObject<&'static str> {
    style("✓").green().bold()
}
/// Yellow ! — nothing was done and the user has to act.
fn icon_warn() -> console::StyledObject<&'static str> {
    style("!").yellow().bold()
}
/// Cyan ✓ — printed next to the final summary.
fn icon_done() -> console::StyledObject<&'static str> {
    style("✓").cyan().bold()
}
/// Dim ✗ — something was deleted.
fn icon_removed() -> console::StyledObject<&'static str> {
    style("✗").dim()
}

// ─── Messages ─────────────────────────────────────────────────────────────────

/// A completed action, e.g. `Added /home/alice/docs to backup list`.
pub fn done(msg: &str) {
    println!("  {}  {msg}", icon_ok());
}

/// A guided no-op: the command did nothing and explains why.
pub fn notice(msg: &str) {
    println!("  {}  {}", icon_warn(), style(msg).yellow());
}

/// A snapshot deleted by the retention pass.
pub fn removed(name: &str) {
    println!(
        "  {}  {}",
        icon_removed(),
        style(format!("Removed old backup: {name}")).dim()
    );
}

// ─── Summary banner ───────────────────────────────────────────────────────────

/// Print the closing line of a backup run.
pub fn print_summary(snapshot: &Path, backed_up: usize, removed: usize) {
    println!();
    println!(
        "  {} {}",
        icon_done(),
        style(summary_line(snapshot, backed_up, removed)).cyan().bold()
    );
}

fn summary_line(snapshot: &Path, backed_up: usize, removed: usize) -> String {
    let copied = match backed_up {
        0 => "No sources backed up".to_string(),
        1 => format!("1 source backed up to {}", snapshot.display()),
        n => format!("{n} sources backed up to {}", snapshot.display()),
    };
    match removed {
        0 => copied,
        1 => format!("{copied}, 1 old backup removed."),
        n => format!("{copied}, {n} old backups removed."),
    }
}

// ─── Spinner ──────────────────────────────────────────────────────────────────

/// Create and start an indeterminate spinner for `label`.
fn make_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("  {spinner:.cyan}  {msg}") {
        pb.set_style(spinner_style.tick_chars(SPINNER_CHARS));
    }
    pb.set_message(format!("{}", style(label).dim()));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run `work` behind a spinner labelled `label`.
///
/// The spinner is cleared before returning, whatever the outcome, so the
/// caller's next line lands on a clean terminal.
pub fn with_spinner<T>(label: &str, work: impl FnOnce() -> T) -> T {
    let spinner = make_spinner(label);
    let out = work();
    spinner.finish_and_clear();
    out
}

// ─── Tests ────────────────────────────────────────────────────────────────────
