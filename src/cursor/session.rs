//! Per-user visualizer session
//!
//! A [`Session`] owns the current run (its snapshots and cursor index) and
//! is the only mutable state between user actions. Each UI instance holds
//! its own session; there is no shared global.

use super::{CursorError, Step};
use crate::parser::{parse_input, ParseError};
use crate::snapshot::{RunStats, Snapshot, SnapshotSequence};
use crate::sort::record_passes;
use tracing::{debug, warn};

type Move = for<'s> fn(&'s [Snapshot], usize) -> Result<Step<'s>, CursorError>;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No valid input sorted yet, or the last Sort was rejected
    Uninitialized,
    /// A run is loaded and more steps remain
    Ready { index: usize },
    /// The cursor sits on the final snapshot
    Exhausted { index: usize },
}

#[derive(Debug)]
struct Run {
    snapshots: SnapshotSequence,
    index: usize,
}

/// The (snapshots, index) pair for one user, plus the Sort / Next Step
/// transitions over it.
#[derive(Debug, Default)]
pub struct Session {
    run: Option<Run>,
}

impl Session {
    pub fn new() -> Self {
        Session { run: None }
    }

    /// Parse `text` and start a new run at its first snapshot.
    ///
    /// A rejected input discards any previous run, so stepping stays
    /// disabled until the next successful Sort.
    pub fn submit(&mut self, text: &str) -> Result<Step<'_>, ParseError> {
        let values = match parse_input(text) {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "rejected input");
                self.run = None;
                return Err(e);
            }
        };

        let snapshots = record_passes(&values);
        debug!(
            elements = values.len(),
            snapshots = snapshots.len(),
            "started new run"
        );
        let run = self.run.insert(Run {
            snapshots,
            index: 0,
        });
        Ok(super::init(&run.snapshots))
    }

    /// Advance one snapshot (the "Next Step" action)
    pub fn next_step(&mut self) -> Result<Step<'_>, CursorError> {
        self.move_cursor(super::advance)
    }

    /// Go back one snapshot
    pub fn previous_step(&mut self) -> Result<Step<'_>, CursorError> {
        self.move_cursor(super::retreat)
    }

    /// Return to the first snapshot of the run
    pub fn rewind(&mut self) -> Result<Step<'_>, CursorError> {
        self.move_cursor(first_ignoring_index)
    }

    /// Skip to the final snapshot of the run
    pub fn jump_to_end(&mut self) -> Result<Step<'_>, CursorError> {
        self.move_cursor(last_ignoring_index)
    }

    fn move_cursor(&mut self, movement: Move) -> Result<Step<'_>, CursorError> {
        let Some(run) = self.run.as_mut() else {
            debug!("cursor moved before any run was recorded");
            return Err(CursorError::NotInitialized);
        };

        let index = movement(run.snapshots.as_slice(), run.index)?.index;
        run.index = index;
        Ok(Step::at(run.snapshots.as_slice(), index))
    }

    /// The step currently displayed, if a run is loaded
    pub fn current(&self) -> Option<Step<'_>> {
        self.run
            .as_ref()
            .map(|run| Step::at(run.snapshots.as_slice(), run.index))
    }

    pub fn state(&self) -> SessionState {
        match &self.run {
            None => SessionState::Uninitialized,
            Some(run) if run.index + 1 >= run.snapshots.len() => {
                SessionState::Exhausted { index: run.index }
            }
            Some(run) => SessionState::Ready { index: run.index },
        }
    }

    /// Whether "Next Step" should be enabled
    pub fn can_advance(&self) -> bool {
        matches!(self.state(), SessionState::Ready { .. })
    }

    /// Snapshots of the current run
    pub fn snapshots(&self) -> Option<&SnapshotSequence> {
        self.run.as_ref().map(|run| &run.snapshots)
    }

    pub fn stats(&self) -> Option<RunStats> {
        self.snapshots().map(SnapshotSequence::stats)
    }
}

fn first_ignoring_index(snapshots: &[Snapshot], _index: usize) -> Result<Step<'_>, CursorError> {
    super::first(snapshots)
}

fn last_ignoring_index(snapshots: &[Snapshot], _index: usize) -> Result<Step<'_>, CursorError> {
    super::last(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_uninitialized() {
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(!session.can_advance());
        assert!(session.current().is_none());
        assert_eq!(session.next_step(), Err(CursorError::NotInitialized));
        assert_eq!(session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_submit_starts_ready_run() {
        let mut session = Session::new();
        let step = session.submit("5, 3, 8, 1").unwrap();
        assert_eq!(step.index, 0);
        assert!(step.can_advance);
        assert_eq!(step.snapshot.state, vec![5, 3, 8, 1]);
        assert_eq!(session.state(), SessionState::Ready { index: 0 });
    }

    #[test]
    fn test_single_value_is_exhausted_immediately() {
        let mut session = Session::new();
        let step = session.submit("7").unwrap();
        assert!(!step.can_advance);
        assert_eq!(session.state(), SessionState::Exhausted { index: 0 });
        assert!(!session.can_advance());
    }

    #[test]
    fn test_steps_through_to_exhaustion() {
        let mut session = Session::new();
        session.submit("2, 1").unwrap();
        let total = session.snapshots().unwrap().len();

        for expected in 1..total {
            let step = session.next_step().unwrap();
            assert_eq!(step.index, expected);
        }
        assert_eq!(
            session.state(),
            SessionState::Exhausted { index: total - 1 }
        );

        // Further advances stay put
        let step = session.next_step().unwrap();
        assert_eq!(step.index, total - 1);
        assert!(!step.can_advance);
        assert_eq!(step.snapshot.state, vec![1, 2]);
    }

    #[test]
    fn test_failed_submit_discards_run() {
        let mut session = Session::new();
        session.submit("3, 2, 1").unwrap();
        session.next_step().unwrap();

        let err = session.submit("3,,1").unwrap_err();
        assert_eq!(err, ParseError::EmptyElement);
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert_eq!(session.next_step(), Err(CursorError::NotInitialized));
    }

    #[test]
    fn test_new_submit_resets_cursor() {
        let mut session = Session::new();
        session.submit("3, 2, 1").unwrap();
        session.jump_to_end().unwrap();

        let step = session.submit("9, 8").unwrap();
        assert_eq!(step.index, 0);
        assert_eq!(step.snapshot.state, vec![9, 8]);
        assert_eq!(session.state(), SessionState::Ready { index: 0 });
    }

    #[test]
    fn test_rewind_and_previous() {
        let mut session = Session::new();
        session.submit("4, 3, 2").unwrap();
        let end = session.jump_to_end().unwrap().index;
        assert_eq!(session.previous_step().unwrap().index, end - 1);
        assert_eq!(session.rewind().unwrap().index, 0);
        assert_eq!(session.previous_step().unwrap().index, 0);
    }

    #[test]
    fn test_stats_follow_run() {
        let mut session = Session::new();
        assert!(session.stats().is_none());
        session.submit("1, 2, 3").unwrap();
        let stats = session.stats().unwrap();
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
    }
}
