use std::collections::BTreeSet;

use proptest::prelude::*;

use eventgate::fs::mock::mtime;
use eventgate::watch::diff::SnapshotDiff;
use eventgate::watch::snapshot::Snapshot;

/// Small name/mtime space so that collisions between `before` and `after`
/// actually happen.
fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    proptest::collection::btree_map("[a-e]\\.txt", 0u64..4, 0..6).prop_map(|m| {
        m.into_iter()
            .map(|(name, secs)| (name, mtime(secs)))
            .collect::<Snapshot>()
    })
}

proptest! {
    #[test]
    fn diff_sets_are_pairwise_disjoint(
        before in snapshot_strategy(),
        after in snapshot_strategy(),
    ) {
        let diff = SnapshotDiff::between(&before, &after);

        let added: BTreeSet<_> = diff.added.iter().collect();
        let removed: BTreeSet<_> = diff.removed.iter().collect();
        let changed: BTreeSet<_> = diff.changed.iter().collect();

        prop_assert!(added.is_disjoint(&removed));
        prop_assert!(added.is_disjoint(&changed));
        prop_assert!(removed.is_disjoint(&changed));
    }

    #[test]
    fn diff_is_complete(
        before in snapshot_strategy(),
        after in snapshot_strategy(),
    ) {
        let diff = SnapshotDiff::between(&before, &after);

        for name in after.keys() {
            if !before.contains_key(name) {
                prop_assert!(diff.added.contains(name));
            }
        }
        for name in before.keys() {
            if !after.contains_key(name) {
                prop_assert!(diff.removed.contains(name));
            }
        }
    }

    #[test]
    fn unchanged_names_appear_in_no_set(
        before in snapshot_strategy(),
        after in snapshot_strategy(),
    ) {
        let diff = SnapshotDiff::between(&before, &after);

        for (name, modified) in &before {
            if after.get(name) == Some(modified) {
                prop_assert!(!diff.added.contains(name));
                prop_assert!(!diff.removed.contains(name));
                prop_assert!(!diff.changed.contains(name));
            }
        }
    }

    #[test]
    fn diff_is_idempotent(
        before in snapshot_strategy(),
        after in snapshot_strategy(),
    ) {
        let first = SnapshotDiff::between(&before, &after);
        let second = SnapshotDiff::between(&before, &after);
        prop_assert_eq!(first, second);
    }
}
