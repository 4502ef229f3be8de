//! Error types for the lcs-diff crate.
//!
//! None of these originate from the input text itself: any two strings are a
//! valid diff input. They report defects in the engine (a bad table access,
//! an impossible backtrace state) or a caller-imposed size limit.
//!
//! Notes:
//! - Each variant carries contextual details via its payload.
//! - Implements `std::error::Error` via `thiserror`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Unified error enumeration for the lcs-diff library.
pub enum DiffError {
    /// Edit graph accessed outside its fixed `rows x cols` dimensions.
    #[error("Coordinate ({row}, {col}) is out of range for a {rows}x{cols} edit graph.")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Backtrace reached a state that a correctly tabulated graph cannot produce.
    #[error("Backtrace invariant violated: {0}")]
    InvariantViolation(String),

    /// The sub-problem would need more table cells than the configured limit.
    #[error("Edit graph needs {cells} cells, exceeding the configured limit of {limit}")]
    TableTooLarge { cells: usize, limit: usize },
}
