//! Bubble Sort, recorded two ways
//!
//! - [`recorder`]: captures a [`Snapshot`](crate::snapshot::Snapshot) before
//!   every comparison and after every pass, for stepping through in the TUI.
//! - [`transcript`]: a human-readable line-per-event log of the whole sort,
//!   used by the non-interactive `transcript` command.
//!
//! Both run the same algorithm (ascending, stable, with early exit once a
//! pass makes no swaps) but share no state.

pub mod recorder;
pub mod transcript;

pub use recorder::record_passes;
pub use transcript::{bubble_sort_transcript, transcript_to_text, TranscriptEvent};
