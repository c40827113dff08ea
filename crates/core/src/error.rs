//! Error types for demarc

use thiserror::Error;

/// Main error type for demarc operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("grid must have at least one row")]
    EmptyGrid,

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("data length mismatch: expected {expected} cells, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Result type alias for demarc operations
pub type Result<T> = std::result::Result<T, Error>;
