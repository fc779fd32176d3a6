//! Input parsing for the visualizer
//!
//! Turns the text typed by the user into the integer list that gets sorted:
//! - [`input`]: comma-separated list parsing and [`ParseError`]
//!
//! # Accepted Input
//!
//! A comma-separated list of base-10 signed integers, e.g. `5, 3, -8, 0`.
//! Whitespace around numbers and commas is ignored. Empty elements (`1,,2`,
//! `1,2,`), decimals and any other text are rejected with a message naming
//! the problem.

pub mod input;

pub use input::{parse_input, ParseError};
