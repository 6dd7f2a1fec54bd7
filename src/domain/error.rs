//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid travel date (expected YYYY-MM-DD): {value}")]
    InvalidDateFormat { value: String },

    #[error("malformed ledger line: {reason}")]
    MalformedLedgerLine { line: String, reason: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
