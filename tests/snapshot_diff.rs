use std::path::Path;

use eventgate::errors::EventgateError;
use eventgate::fs::mock::{mtime, MockFileSystem};
use eventgate::watch::diff::SnapshotDiff;
use eventgate::watch::snapshot::{compile_pattern, take_snapshot, Snapshot};
use eventgate::watch::EventKind;
use eventgate_test_utils::builders::mask;

#[test]
fn snapshot_filters_by_pattern_and_maps_mtimes() {
    let fs = MockFileSystem::new();
    fs.add_file("watched/a.txt", mtime(100));
    fs.add_file("watched/b.txt", mtime(200));
    fs.add_file("watched/notes.md", mtime(300));
    fs.add_dir("watched/subdir");

    let matcher = compile_pattern("*.txt").unwrap();
    let snapshot = take_snapshot(&fs, Path::new("watched"), &matcher).unwrap();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.get("a.txt"), Some(&mtime(100)));
    assert_eq!(snapshot.get("b.txt"), Some(&mtime(200)));
    assert!(!snapshot.contains_key("notes.md"));
    assert!(!snapshot.contains_key("subdir"));
}

#[test]
fn snapshot_is_not_recursive() {
    let fs = MockFileSystem::new();
    fs.add_file("watched/a.txt", mtime(1));
    fs.add_file("watched/nested/b.txt", mtime(2));

    let matcher = compile_pattern("*.txt").unwrap();
    let snapshot = take_snapshot(&fs, Path::new("watched"), &matcher).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.contains_key("a.txt"));
}

#[test]
fn snapshot_matching_is_case_sensitive() {
    let fs = MockFileSystem::new();
    fs.add_file("watched/REPORT.CSV", mtime(1));
    fs.add_file("watched/report.csv", mtime(2));

    let matcher = compile_pattern("*.csv").unwrap();
    let snapshot = take_snapshot(&fs, Path::new("watched"), &matcher).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.contains_key("report.csv"));
}

#[test]
fn snapshot_of_missing_dir_is_directory_unavailable() {
    let fs = MockFileSystem::new();

    let matcher = compile_pattern("*.txt").unwrap();
    let err = take_snapshot(&fs, Path::new("nowhere"), &matcher).unwrap_err();

    assert!(matches!(err, EventgateError::DirectoryUnavailable { .. }));
}

#[test]
fn diff_classifies_added_removed_changed() {
    let before = Snapshot::from([
        ("a.txt".to_string(), mtime(1)),
        ("b.txt".to_string(), mtime(2)),
        ("c.txt".to_string(), mtime(3)),
    ]);
    let after = Snapshot::from([
        ("b.txt".to_string(), mtime(2)),
        ("c.txt".to_string(), mtime(30)),
        ("d.txt".to_string(), mtime(4)),
    ]);

    let diff = SnapshotDiff::between(&before, &after);

    assert_eq!(diff.added, vec!["d.txt".to_string()]);
    assert_eq!(diff.removed, vec!["a.txt".to_string()]);
    assert_eq!(diff.changed, vec!["c.txt".to_string()]);
}

#[test]
fn diff_of_identical_snapshots_is_empty() {
    let snapshot = Snapshot::from([
        ("a.txt".to_string(), mtime(1)),
        ("b.txt".to_string(), mtime(2)),
    ]);

    let diff = SnapshotDiff::between(&snapshot, &snapshot);
    assert!(diff.is_empty());
}

#[test]
fn first_interesting_respects_the_mask() {
    let before = Snapshot::from([("gone.txt".to_string(), mtime(1))]);
    let after = Snapshot::from([("new.txt".to_string(), mtime(2))]);
    let diff = SnapshotDiff::between(&before, &after);

    // Both an addition and a removal happened, but only additions are
    // selected.
    let (kind, names) = diff.first_interesting(&mask(true, false, false)).unwrap();
    assert_eq!(kind, EventKind::Added);
    assert_eq!(names, ["new.txt".to_string()]);

    // Deletions-only mask picks the removal instead.
    let (kind, names) = diff.first_interesting(&mask(false, true, false)).unwrap();
    assert_eq!(kind, EventKind::Removed);
    assert_eq!(names, ["gone.txt".to_string()]);

    // Changes-only mask sees nothing here.
    assert!(diff.first_interesting(&mask(false, false, true)).is_none());
}

#[test]
fn first_interesting_precedence_is_added_then_removed_then_changed() {
    let before = Snapshot::from([
        ("gone.txt".to_string(), mtime(1)),
        ("bumped.txt".to_string(), mtime(2)),
    ]);
    let after = Snapshot::from([
        ("bumped.txt".to_string(), mtime(20)),
        ("new.txt".to_string(), mtime(3)),
    ]);
    let diff = SnapshotDiff::between(&before, &after);

    // All three kinds fired in the same cycle with everything selected:
    // additions win.
    let (kind, names) = diff.first_interesting(&mask(true, true, true)).unwrap();
    assert_eq!(kind, EventKind::Added);
    assert_eq!(names, ["new.txt".to_string()]);

    // Without additions selected, deletions beat changes.
    let (kind, _) = diff.first_interesting(&mask(false, true, true)).unwrap();
    assert_eq!(kind, EventKind::Removed);
}
