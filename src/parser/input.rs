//! Comma-separated integer list parser

use thiserror::Error;

/// Reasons the input text could not be turned into a list of integers.
///
/// The `Display` text is shown to the user verbatim, so each variant names the
/// offending token or condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace was entered
    #[error("empty input")]
    EmptyInput,

    /// Two separators with nothing between them, or a trailing/leading comma
    #[error("empty element")]
    EmptyElement,

    /// A token that is not a base-10 signed integer
    #[error("invalid integer: '{token}'")]
    InvalidInteger { token: String },
}

/// Parse a comma-separated list of integers, preserving input order.
///
/// Duplicates, negative numbers and zero are all allowed. A leading `+` is
/// accepted; values must fit in an `i64`.
///
/// # Errors
///
/// See [`ParseError`] for the rejected shapes of input.
pub fn parse_input(text: &str) -> Result<Vec<i64>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    trimmed
        .split(',')
        .map(str::trim)
        .map(|token| {
            if token.is_empty() {
                return Err(ParseError::EmptyElement);
            }
            token.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
                token: token.to_string(),
            })
        })
        .collect()
}
