//! Errors raised before any box is drawn.

use std::io;

/// Errors that abort an invocation. Rendering itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum BoxError {
    #[error("{flag} must have either 1 value or {depth} values, but got {got}")]
    ListLength {
        flag: &'static str,
        depth: usize,
        got: usize,
    },

    #[error("failed to read from stdin: {0}")]
    ReadInput(#[from] io::Error),

    #[error("no input provided: please provide text via stdin or command line arguments")]
    NoInput,
}
