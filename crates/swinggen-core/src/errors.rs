//! Error types for the swinggen pipeline.

use thiserror::Error;

/// Errors raised while building the description tree.
///
/// All variants are fatal and carry the offending 1-based line number; a
/// parse failure aborts the run before any output is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed file: missing kind after 'Begin' on line {line}")]
    MissingKind { line: u32 },

    #[error("Malformed file: 'End' was found on line {line} without a matching 'Begin'")]
    UnmatchedClose { line: u32 },

    #[error("Malformed file: expected to close '{expected}' on line {line} but 'End {found}' was found")]
    CloseMismatch {
        expected: String,
        found: String,
        line: u32,
    },

    #[error("Malformed file: EOF was found after line {line}. 'End' missing?")]
    UnterminatedBlock { line: u32 },

    #[error("Malformed file: property on line {line} outside of any open block")]
    PropertyOutsideBlock { line: u32 },
}
