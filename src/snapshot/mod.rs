// Snapshot types captured while sorting

use serde::Serialize;

/// An adjacent pair of indices `{left, left + 1}` under comparison.
///
/// Only the left index is stored, so the pair is adjacent by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "[usize; 2]")]
pub struct Comparison {
    left: usize,
}

impl Comparison {
    pub fn new(left: usize) -> Self {
        Comparison { left }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.left + 1
    }

    /// Check whether `index` is one of the two compared positions
    pub fn contains(&self, index: usize) -> bool {
        index == self.left || index == self.right()
    }
}

impl From<Comparison> for [usize; 2] {
    fn from(cmp: Comparison) -> Self {
        [cmp.left(), cmp.right()]
    }
}

/// Snapshot of the array at one point of the sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub state: Vec<i64>,
    pub comparing: Option<Comparison>,
    pub pointer: usize, // Rightmost index not yet settled in this pass
}

impl Snapshot {
    /// True for the snapshot emitted after a pass, when nothing is being compared
    pub fn is_pass_boundary(&self) -> bool {
        self.comparing.is_none()
    }
}

/// Summary counts for one recorded run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
    /// Stopped before running all `n` passes because a pass made no swap
    pub early_exit: bool,
}

/// Ordered history of snapshots for one run.
///
/// Always holds at least one snapshot; only the recorder builds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SnapshotSequence {
    snapshots: Vec<Snapshot>,
}

impl SnapshotSequence {
    pub(crate) fn new(first: Snapshot) -> Self {
        SnapshotSequence {
            snapshots: vec![first],
        }
    }

    /// Wrap a recorded history; callers guarantee at least one snapshot
    pub(crate) fn from_recorded(snapshots: Vec<Snapshot>) -> Self {
        debug_assert!(!snapshots.is_empty(), "a run always records a snapshot");
        SnapshotSequence { snapshots }
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false for a recorded run
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    pub fn last(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Count passes, comparisons and swaps from the recorded history.
    ///
    /// A comparison swapped iff the snapshot that follows it shows a
    /// different array.
    pub fn stats(&self) -> RunStats {
        let passes = self.iter().filter(|s| s.is_pass_boundary()).count();
        let mut comparisons = 0;
        let mut swaps = 0;
        for pair in self.snapshots.windows(2) {
            if pair[0].comparing.is_some() {
                comparisons += 1;
                if pair[0].state != pair[1].state {
                    swaps += 1;
                }
            }
        }

        // Single-element runs are one degenerate boundary, not a pass
        let n = self.first().state.len();
        let passes = if n <= 1 { 0 } else { passes };

        RunStats {
            passes,
            comparisons,
            swaps,
            early_exit: n > 1 && passes < n,
        }
    }
}

impl<'a> IntoIterator for &'a SnapshotSequence {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
