// src/watch/diff.rs

//! Pure classification of the difference between two snapshots.

use crate::watch::snapshot::Snapshot;
use crate::watch::{EventKind, InterestMask};

/// Names that were added, removed, or changed between two snapshots.
///
/// For any given comparison the three sets are pairwise disjoint: a name in
/// `after` but not `before` is only ever `added`, and a name present in both
/// can only be `changed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
}

impl SnapshotDiff {
    /// Classify `after` against `before`.
    pub fn between(before: &Snapshot, after: &Snapshot) -> Self {
        let added = after
            .keys()
            .filter(|name| !before.contains_key(*name))
            .cloned()
            .collect();
        let removed = before
            .keys()
            .filter(|name| !after.contains_key(*name))
            .cloned()
            .collect();
        let changed = before
            .iter()
            .filter(|(name, modified)| after.get(*name).is_some_and(|m| m != *modified))
            .map(|(name, _)| name.clone())
            .collect();

        Self {
            added,
            removed,
            changed,
        }
    }

    /// First event kind selected by `mask` with a non-empty name set.
    ///
    /// When more than one kind fires in the same cycle the tie-break is
    /// fixed: additions win over deletions, deletions win over changes.
    pub fn first_interesting(&self, mask: &InterestMask) -> Option<(EventKind, &[String])> {
        if mask.additions && !self.added.is_empty() {
            return Some((EventKind::Added, &self.added));
        }
        if mask.deletions && !self.removed.is_empty() {
            return Some((EventKind::Removed, &self.removed));
        }
        if mask.changes && !self.changed.is_empty() {
            return Some((EventKind::Changed, &self.changed));
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
