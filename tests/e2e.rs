//! End-to-end tests for `dirsnap backup`.
//!
//! Each test builds a small source tree and a `backup_config.toml` in a
//! scratch directory, runs the real binary, and inspects the destination.
//!
//! # Running
//!
//! ```sh
//! cargo test --test e2e
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

const BIN: &str = env!("CARGO_BIN_EXE_dirsnap");

// ─── Fixture ──────────────────────────────────────────────────────────────────

/// A self-contained environment with a source tree and a destination.
struct Fixture {
    /// Root temp dir — everything lives under here; deleted on drop.
    _root: tempfile::TempDir,
    /// Directory registered as the single source.
    pub source_dir: PathBuf,
    /// Backup destination.
    pub dest_dir: PathBuf,
    /// Working directory used when invoking `dirsnap`; holds the config.
    pub work_dir: PathBuf,
}

impl Fixture {
    /// Create a fixture whose config already lists `source_dir` and
    /// `dest_dir`, with the given retention.
    fn new(retention_days: u32) -> Self {
        let root = tempfile::tempdir().unwrap();
        let source_dir = root.path().join("a");
        let dest_dir = root.path().join("out");
        let work_dir = root.path().join("work");

        fs::create_dir_all(source_dir.join("subdir")).unwrap();
        fs::create_dir_all(&dest_dir).unwrap();
        fs::create_dir_all(&work_dir).unwrap();

        fs::write(source_dir.join("x.txt"), "hello from x").unwrap();
        fs::write(source_dir.join("subdir").join("nested.txt"), "nested").unwrap();

        let fx = Self {
            _root: root,
            source_dir,
            dest_dir,
            work_dir,
        };
        fx.write_config(&[fx.source_dir.as_path()], &fx.dest_dir, retention_days);
        fx
    }

    fn write_config(&self, sources: &[&Path], dest: &Path, retention_days: u32) {
        let sources: Vec<String> = sources
            .iter()
            .map(|s| format!("{:?}", s.to_str().unwrap()))
            .collect();
        let config = format!(
            "sources = [{}]\ndestination = {:?}\nretention_days = {retention_days}\n",
            sources.join(", "),
            dest.to_str().unwrap(),
        );
        fs::write(self.work_dir.join("backup_config.toml"), config).unwrap();
    }

    /// Run `dirsnap` with `args` inside this fixture's working directory.
    fn run(&self, args: &[&str]) -> (bool, String, String) {
        let out = Command::new(BIN)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .unwrap_or_else(|e| panic!("failed to spawn {BIN}: {e}"));

        (
            out.status.success(),
            String::from_utf8_lossy(&out.stdout).into_owned(),
            String::from_utf8_lossy(&out.stderr).into_owned(),
        )
    }

    /// Names of the direct children of the destination, sorted.
    fn dest_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.dest_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// The snapshot directories created by runs, i.e. everything that parses
    /// as `backup_YYYYMMDD_HHMM`.
    fn snapshots(&self) -> Vec<String> {
        self.dest_entries()
            .into_iter()
            .filter(|n| {
                n.strip_prefix("backup_").is_some_and(|s| {
                    chrono::NaiveDateTime::parse_from_str(s, "%Y%m%d_%H%M").is_ok()
                })
            })
            .collect()
    }
}

/// A snapshot name from yesterday: inside any retention window of a day or
/// more, and never the name of the snapshot the run itself creates.
fn recent_snapshot_name() -> String {
    let yesterday = chrono::Local::now() - chrono::Duration::days(1);
    format!("backup_{}_0000", yesterday.format("%Y%m%d"))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

/// A backup copies the source tree byte for byte into a new snapshot.
#[test]
fn backup_copies_source_into_timestamped_snapshot() {
    let fx = Fixture::new(7);

    let (ok, stdout, stderr) = fx.run(&["backup"]);
    assert!(ok, "backup should succeed; stderr:\n{stderr}");
    assert!(stdout.contains("Backed up"));

    let snaps = fx.snapshots();
    assert_eq!(snaps.len(), 1, "expected one snapshot, got {snaps:?}");

    let copy = fx.dest_dir.join(&snaps[0]).join("a");
    assert_eq!(fs::read_to_string(copy.join("x.txt")).unwrap(), "hello from x");
    assert_eq!(
        fs::read_to_string(copy.join("subdir/nested.txt")).unwrap(),
        "nested"
    );
}

/// Old snapshots are pruned, recent ones kept.
#[test]
fn backup_prunes_snapshots_outside_the_window() {
    let fx = Fixture::new(7);
    let recent = recent_snapshot_name();
    fs::create_dir(fx.dest_dir.join("backup_20200101_0000")).unwrap();
    fs::create_dir(fx.dest_dir.join(&recent)).unwrap();

    let (ok, stdout, stderr) = fx.run(&["backup"]);
    assert!(ok, "backup should succeed; stderr:\n{stderr}");
    assert!(stdout.contains("Removed old backup: backup_20200101_0000"));

    let entries = fx.dest_entries();
    assert!(!entries.contains(&"backup_20200101_0000".to_string()));
    assert!(entries.contains(&recent));
}

/// Directories that only look like snapshots are never pruned.
#[test]
fn backup_leaves_foreign_directories_alone() {
    let fx = Fixture::new(0);
    fs::create_dir(fx.dest_dir.join("backup_not_a_date")).unwrap();
    fs::write(fx.dest_dir.join("backup_not_a_date/keep.txt"), "keep").unwrap();

    let (ok, _, stderr) = fx.run(&["backup"]);
    assert!(ok, "backup should succeed; stderr:\n{stderr}");
    assert!(fx.dest_dir.join("backup_not_a_date/keep.txt").exists());
}

/// Without sources the run is a guided no-op: exit 0, nothing written.
#[test]
fn backup_without_sources_writes_nothing() {
    let fx = Fixture::new(7);
    fx.write_config(&[], &fx.dest_dir, 7);
    let before = fs::read_to_string(fx.work_dir.join("backup_config.toml")).unwrap();

    let (ok, stdout, _) = fx.run(&["backup"]);
    assert!(ok, "a guided no-op exits zero");
    assert!(stdout.contains("Please configure backup directories and destination first"));
    assert!(fx.dest_entries().is_empty());
    assert_eq!(
        fs::read_to_string(fx.work_dir.join("backup_config.toml")).unwrap(),
        before
    );
}

/// Without a destination the run is a guided no-op as well.
#[test]
fn backup_without_destination_writes_nothing() {
    let fx = Fixture::new(7);
    fx.write_config(&[fx.source_dir.as_path()], Path::new(""), 7);

    let (ok, stdout, _) = fx.run(&["backup"]);
    assert!(ok);
    assert!(stdout.contains("Please configure"));
    assert!(fx.dest_entries().is_empty());
}

/// A source removed after registration is skipped without complaint.
#[test]
fn backup_skips_vanished_sources() {
    let fx = Fixture::new(7);
    let gone = fx.work_dir.join("gone");
    fx.write_config(&[gone.as_path(), fx.source_dir.as_path()], &fx.dest_dir, 7);

    let (ok, stdout, stderr) = fx.run(&["backup"]);
    assert!(ok, "backup should succeed; stderr:\n{stderr}");
    assert!(!stdout.contains("gone"));

    let snaps = fx.snapshots();
    assert_eq!(snaps.len(), 1);
    assert!(fx.dest_dir.join(&snaps[0]).join("a/x.txt").exists());
}

/// Two sources with the same final component collide inside one snapshot.
#[test]
fn backup_with_colliding_source_names_fails() {
    let fx = Fixture::new(7);
    let twin = fx.work_dir.join("a");
    fs::create_dir(&twin).unwrap();
    fs::write(twin.join("y.txt"), "twin").unwrap();
    fx.write_config(&[fx.source_dir.as_path(), twin.as_path()], &fx.dest_dir, 7);

    let (ok, _, stderr) = fx.run(&["backup"]);
    assert!(!ok, "a name collision is fatal");
    assert!(stderr.contains("already exists"), "stderr:\n{stderr}");
}

/// The full CLI flow: add, dest, backup, list.
#[test]
fn register_then_backup() {
    let fx = Fixture::new(7);
    fs::remove_file(fx.work_dir.join("backup_config.toml")).unwrap();
    let dest = fx.work_dir.join("snapshots");

    assert!(fx.run(&["add", fx.source_dir.to_str().unwrap()]).0);
    assert!(fx.run(&["dest", dest.to_str().unwrap()]).0);
    let (ok, _, stderr) = fx.run(&["backup"]);
    assert!(ok, "backup should succeed; stderr:\n{stderr}");

    let snaps: Vec<_> = fs::read_dir(&dest).unwrap().collect();
    assert_eq!(snaps.len(), 1);
    let snap = snaps.into_iter().next().unwrap().unwrap().path();
    assert!(snap.join("a/x.txt").is_file());
}

/// An unmounted destination with nothing left to copy is not an error.
#[test]
fn backup_with_missing_destination_and_vanished_sources_exits_zero() {
    let fx = Fixture::new(7);
    let usb = fx.work_dir.join("usb");
    let gone = fx.work_dir.join("gone");
    fx.write_config(&[gone.as_path()], &usb, 7);

    let (ok, stdout, stderr) = fx.run(&["backup"]);
    assert!(ok, "backup should succeed; stderr:\n{stderr}");
    assert!(stdout.contains("No sources backed up"));
    assert!(!usb.exists(), "the destination is not recreated");
}
