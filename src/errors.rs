use thiserror::Error;

/// Error type that captures common ledger and goal failures.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unknown category: \"{0}\"")]
    UnknownCategory(String),
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
    #[error("Not enough data: {0}")]
    EmptyData(String),
    #[error("Index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
}
