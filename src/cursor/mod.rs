//! Stepping through a recorded run
//!
//! The cursor functions are pure: the caller keeps the snapshots and the
//! current index, and each call returns the [`Step`] to display next. The
//! [`session`] module wraps them with the per-user state the UI needs.

pub mod session;

pub use session::{Session, SessionState};

use crate::snapshot::{Snapshot, SnapshotSequence};
use thiserror::Error;

/// Result of positioning the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub snapshot: &'a Snapshot,
    pub index: usize,
    pub can_advance: bool,
}

impl<'a> Step<'a> {
    fn at(snapshots: &'a [Snapshot], index: usize) -> Self {
        Step {
            snapshot: &snapshots[index],
            index,
            can_advance: index + 1 < snapshots.len(),
        }
    }
}

/// Cursor operations that cannot produce a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Stepping was requested before any run was recorded
    #[error("Initialize first.")]
    NotInitialized,
}

/// Position the cursor on the first snapshot of a fresh run
pub fn init(sequence: &SnapshotSequence) -> Step<'_> {
    Step::at(sequence.as_slice(), 0)
}

/// Move one snapshot forward, stopping at the last one.
///
/// Calling this at the last index returns the last snapshot again with
/// `can_advance == false`. An out-of-range `index` is clamped.
pub fn advance(snapshots: &[Snapshot], index: usize) -> Result<Step<'_>, CursorError> {
    let last = last_index(snapshots)?;
    Ok(Step::at(snapshots, index.saturating_add(1).min(last)))
}

/// Move one snapshot back, stopping at the first one.
pub fn retreat(snapshots: &[Snapshot], index: usize) -> Result<Step<'_>, CursorError> {
    let last = last_index(snapshots)?;
    Ok(Step::at(snapshots, index.min(last).saturating_sub(1)))
}

/// Jump back to the first snapshot
pub fn first(snapshots: &[Snapshot]) -> Result<Step<'_>, CursorError> {
    last_index(snapshots)?;
    Ok(Step::at(snapshots, 0))
}

/// Jump straight to the final snapshot
pub fn last(snapshots: &[Snapshot]) -> Result<Step<'_>, CursorError> {
    let last = last_index(snapshots)?;
    Ok(Step::at(snapshots, last))
}

fn last_index(snapshots: &[Snapshot]) -> Result<usize, CursorError> {
    snapshots
        .len()
        .checked_sub(1)
        .ok_or(CursorError::NotInitialized)
}
