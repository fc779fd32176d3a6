//! Pass recorder: runs Bubble Sort and keeps every intermediate state

use crate::snapshot::{Comparison, Snapshot, SnapshotSequence};
use tracing::debug;

/// Run Bubble Sort over a copy of `values`, capturing snapshots.
///
/// For each pass `i` the recorder emits one snapshot per comparison, taken
/// *before* the pair is (possibly) swapped, followed by one boundary snapshot
/// with the array as it stands after the pass. `pointer` is `n - i - 1` for
/// every snapshot of pass `i`. The run stops after the first pass without a
/// swap.
///
/// Zero- and one-element inputs produce a single boundary snapshot with
/// `pointer == 0`.
pub fn record_passes(values: &[i64]) -> SnapshotSequence {
    let mut arr = values.to_vec();
    let n = arr.len();

    if n <= 1 {
        return SnapshotSequence::new(Snapshot {
            state: arr,
            comparing: None,
            pointer: 0,
        });
    }

    let mut history = Vec::new();

    for i in 0..n {
        let pointer = n - i - 1;
        let mut swapped = false;

        for j in 0..pointer {
            history.push(Snapshot {
                state: arr.clone(),
                comparing: Some(Comparison::new(j)),
                pointer,
            });

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }

        history.push(Snapshot {
            state: arr.clone(),
            comparing: None,
            pointer,
        });

        if !swapped {
            debug!(pass = i + 1, "no swaps, stopping early");
            break;
        }
    }

    let history = SnapshotSequence::from_recorded(history);
    debug!(snapshots = history.len(), elements = n, "recorded run");
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(seq: &SnapshotSequence) -> Vec<Vec<i64>> {
        seq.iter().map(|s| s.state.clone()).collect()
    }

    #[test]
    fn test_single_element() {
        let seq = record_passes(&[7]);
        assert_eq!(seq.len(), 1);
        let only = seq.first();
        assert_eq!(only.state, vec![7]);
        assert_eq!(only.pointer, 0);
        assert!(only.comparing.is_none());
    }

    #[test]
    fn test_empty_input_records_one_snapshot() {
        let seq = record_passes(&[]);
        assert_eq!(seq.len(), 1);
        assert!(seq.first().state.is_empty());
        assert_eq!(seq.first().pointer, 0);
    }

    #[test]
    fn test_example_run() {
        let seq = record_passes(&[5, 3, 8, 1]);

        let first = seq.first();
        assert_eq!(first.state, vec![5, 3, 8, 1]);
        assert_eq!(first.comparing, Some(Comparison::new(0)));
        assert_eq!(first.pointer, 3);

        let second = seq.get(1).unwrap();
        assert_eq!(second.state, vec![3, 5, 8, 1]);
        assert_eq!(second.comparing, Some(Comparison::new(1)));

        assert_eq!(seq.last().state, vec![1, 3, 5, 8]);
        assert!(seq.last().comparing.is_none());
    }

    #[test]
    fn test_example_run_full_history() {
        let seq = record_passes(&[5, 3, 8, 1]);
        assert_eq!(
            states(&seq),
            vec![
                // pass 1: compare (0,1) (1,2) (2,3), boundary
                vec![5, 3, 8, 1],
                vec![3, 5, 8, 1],
                vec![3, 5, 8, 1],
                vec![3, 5, 1, 8],
                // pass 2
                vec![3, 5, 1, 8],
                vec![3, 5, 1, 8],
                vec![3, 1, 5, 8],
                // pass 3
                vec![3, 1, 5, 8],
                vec![1, 3, 5, 8],
                // pass 4: no comparisons left, no swap
                vec![1, 3, 5, 8],
            ]
        );
        let pointers: Vec<usize> = seq.iter().map(|s| s.pointer).collect();
        assert_eq!(pointers, vec![3, 3, 3, 3, 2, 2, 2, 1, 1, 0]);
    }

    #[test]
    fn test_sorted_input_exits_after_one_pass() {
        let seq = record_passes(&[1, 2, 3]);
        // two comparisons and one boundary
        assert_eq!(seq.len(), 3);
        assert!(seq.iter().all(|s| s.state == vec![1, 2, 3]));
        assert!(seq.last().is_pass_boundary());

        let stats = seq.stats();
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.comparisons, 2);
        assert_eq!(stats.swaps, 0);
        assert!(stats.early_exit);
    }

    #[test]
    fn test_reverse_input_counts() {
        let stats = record_passes(&[4, 3, 2, 1]).stats();
        assert_eq!(stats.comparisons, 6);
        assert_eq!(stats.swaps, 6);
        assert_eq!(stats.passes, 4);
        assert!(!stats.early_exit);
    }

    #[test]
    fn test_early_exit_flag() {
        // Sorted after pass 1, confirmed by pass 2, so passes 3 and 4 never run
        let stats = record_passes(&[2, 1, 3, 4]).stats();
        assert_eq!(stats.passes, 2);
        assert!(stats.early_exit);

        let single = record_passes(&[7]).stats();
        assert_eq!(single.passes, 0);
        assert!(!single.early_exit);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let input = vec![3, 2, 1];
        let _ = record_passes(&input);
        assert_eq!(input, vec![3, 2, 1]);
    }

    #[test]
    fn test_stable_with_duplicates() {
        let seq = record_passes(&[2, 1, 2, 1]);
        assert_eq!(seq.last().state, vec![1, 1, 2, 2]);
    }
}
