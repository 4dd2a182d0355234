//! Library-wide error types

use thiserror::Error;

/// Result type alias using `PlanError`.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors produced while building or projecting a business plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Malformed or out-of-range input: empty plan, horizon below one year,
    /// negative base figures, duplicate line names, growth rate outside the
    /// configured bounds, or non-finite numbers.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Underlying I/O failure while reading plan data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed plan CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlanError {
    /// Shorthand for an `InvalidInput` with a formatted message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        PlanError::InvalidInput(msg.into())
    }
}
