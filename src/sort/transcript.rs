//! Full-granularity transcript of a Bubble Sort run
//!
//! Unlike the recorder, which groups work into snapshots, the transcript
//! logs every comparison and its outcome. It sorts its own copy of the input.

use std::fmt;

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Input too short to need any comparison
    NothingToSort { len: usize },

    /// Start of a pass; `last_index` is the last left index compared in it
    PassStart { pass: usize, last_index: isize },

    /// `a[index]` and `a[index + 1]` are compared
    Compare { index: usize, left: i64, right: i64 },

    /// The pair was out of order and swapped
    Swapped { state: Vec<i64> },

    /// The pair was already in order
    NoSwap { state: Vec<i64> },

    /// A pass made no swaps, so the list is sorted
    EarlyExit { pass: usize },

    /// The sorted result
    Final { state: Vec<i64> },
}

impl TranscriptEvent {
    /// Pass headers, and the final result after a pass, get a blank line
    /// above them in the text form
    fn starts_section(&self, previous: Option<&TranscriptEvent>) -> bool {
        match self {
            TranscriptEvent::PassStart { .. } => true,
            TranscriptEvent::Final { .. } => {
                !matches!(previous, Some(TranscriptEvent::NothingToSort { .. }))
            }
            _ => false,
        }
    }
}

impl fmt::Display for TranscriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptEvent::NothingToSort { len } => {
                write!(
                    f,
                    "No comparisons needed — list has only {} element(s).",
                    len
                )
            }
            TranscriptEvent::PassStart { pass, last_index } => {
                write!(
                    f,
                    "--- Pass {} (checking indices 0 to {}) ---",
                    pass, last_index
                )
            }
            TranscriptEvent::Compare { index, left, right } => {
                write!(
                    f,
                    "Comparing a[{}]={} and a[{}]={}",
                    index,
                    left,
                    index + 1,
                    right
                )
            }
            TranscriptEvent::Swapped { state } => write!(f, "Swapped → {:?}", state),
            TranscriptEvent::NoSwap { state } => write!(f, "No swap → {:?}", state),
            TranscriptEvent::EarlyExit { pass } => {
                write!(
                    f,
                    "No swaps in Pass {} — list is already sorted early.",
                    pass
                )
            }
            TranscriptEvent::Final { state } => write!(f, "Final sorted list: {:?}", state),
        }
    }
}

/// Sort a copy of `values`, returning every event in order.
///
/// The last event is always [`TranscriptEvent::Final`].
pub fn bubble_sort_transcript(values: &[i64]) -> Vec<TranscriptEvent> {
    let mut a = values.to_vec();
    let n = a.len();
    let mut events = Vec::new();

    if n <= 1 {
        events.push(TranscriptEvent::NothingToSort { len: n });
        events.push(TranscriptEvent::Final { state: a });
        return events;
    }

    for i in 0..n {
        let mut swapped = false;
        events.push(TranscriptEvent::PassStart {
            pass: i + 1,
            // Goes to -1 on the final, empty pass
            last_index: n as isize - i as isize - 2,
        });

        for j in 0..n - i - 1 {
            events.push(TranscriptEvent::Compare {
                index: j,
                left: a[j],
                right: a[j + 1],
            });

            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                swapped = true;
                events.push(TranscriptEvent::Swapped { state: a.clone() });
            } else {
                events.push(TranscriptEvent::NoSwap { state: a.clone() });
            }
        }

        if !swapped {
            events.push(TranscriptEvent::EarlyExit { pass: i + 1 });
            break;
        }
    }

    events.push(TranscriptEvent::Final { state: a });
    events
}

/// Render events as newline-separated text, with a blank line before each
/// pass header and before the final result of a run that made passes.
pub fn transcript_to_text(events: &[TranscriptEvent]) -> String {
    let mut lines = Vec::with_capacity(events.len() * 2);
    let mut previous = None;
    for event in events {
        if event.starts_section(previous) {
            lines.push(String::new());
        }
        lines.push(event.to_string());
        previous = Some(event);
    }
    lines.join("\n")
}
