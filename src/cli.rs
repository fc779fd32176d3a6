//! Command-line interface
//!
//! With no subcommand the binary starts the interactive TUI. The
//! subcommands print a whole run at once and exit.

use crate::parser::{parse_input, ParseError};
use crate::render;
use crate::sort::{bubble_sort_transcript, record_passes, transcript_to_text};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "bubbletty",
    about = "Step through Bubble Sort one comparison at a time",
    version
)]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Numbers to pre-fill in the TUI input field, e.g. "5, 3, 8, 1"
    #[arg(long, short)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every comparison and swap of the sort.
    Transcript {
        /// Comma-separated integers
        input: String,
    },

    /// Print every recorded snapshot, one per line.
    Frames {
        /// Comma-separated integers
        input: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input error: {0}")]
    Input(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Full transcript text for the `transcript` command
pub fn transcript_output(input: &str) -> Result<String, CliError> {
    let values = parse_input(input)?;
    Ok(transcript_to_text(&bubble_sort_transcript(&values)))
}

/// Snapshot listing for the `frames` command
pub fn frames_output(input: &str, json: bool) -> Result<String, CliError> {
    let values = parse_input(input)?;
    let snapshots = record_passes(&values);
    let stats = snapshots.stats();

    if json {
        let value = serde_json::json!({
            "snapshots": snapshots,
            "stats": stats,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut lines: Vec<String> = snapshots
        .iter()
        .enumerate()
        .map(|(index, snapshot)| {
            format!(
                "{:>4}  pointer={:<3} {}",
                index,
                snapshot.pointer,
                render::to_text(snapshot)
            )
        })
        .collect();
    lines.push(format!(
        "passes: {}, comparisons: {}, swaps: {}, early exit: {}",
        stats.passes,
        stats.comparisons,
        stats.swaps,
        if stats.early_exit { "yes" } else { "no" }
    ));
    Ok(lines.join("\n"))
}
