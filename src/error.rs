//! Error types for board validation and dictionary loading.

use thiserror::Error;

/// Errors surfaced by the solver and its dictionary loader.
#[derive(Debug, Error)]
pub enum BoggleError {
    /// The board dimensions are non-positive or do not match the letter count.
    #[error("invalid board: {width}x{height} needs {expected} letters, got {letters}")]
    InvalidInput {
        width: i64,
        height: i64,
        expected: i64,
        letters: usize,
    },

    /// The word list could not be read.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BoggleError>;
