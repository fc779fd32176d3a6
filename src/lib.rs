//! # Introduction
//!
//! bubbletty runs Bubble Sort over a list of integers typed by the user,
//! capturing a snapshot of the array before every comparison and after every
//! pass. The snapshot history is then stepped through in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Text → Parser → integers → Recorder → Snapshots → Cursor → Renderer → TUI
//! ```
//!
//! 1. [`parser`] — turns `"5, 3, 8, 1"` into `[5, 3, 8, 1]` or a
//!    [`parser::ParseError`].
//! 2. [`sort`] — the pass recorder ([`sort::record_passes`]) and the
//!    full-text transcript ([`sort::bubble_sort_transcript`]).
//! 3. [`snapshot`] — [`snapshot::Snapshot`] and the immutable
//!    [`snapshot::SnapshotSequence`] of one run.
//! 4. [`cursor`] — pure `init` / `advance` over a run, and the per-user
//!    [`cursor::Session`] state machine.
//! 5. [`render`] — maps a snapshot to highlighted cells.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use bubbletty::cursor::Session;
//!
//! let mut session = Session::new();
//! let first = session.submit("5, 3, 8, 1").unwrap();
//! assert_eq!(first.snapshot.state, vec![5, 3, 8, 1]);
//! assert!(first.can_advance);
//!
//! let next = session.next_step().unwrap();
//! assert_eq!(next.snapshot.state, vec![3, 5, 8, 1]);
//! ```

pub mod cli;
pub mod config;
pub mod cursor;
pub mod parser;
pub mod render;
pub mod snapshot;
pub mod sort;
pub mod ui;
