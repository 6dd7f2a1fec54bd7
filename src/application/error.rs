//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add workflow-level rejections.
///
/// The selection, capacity, and date variants are the rejections surfaced to
/// the user by the menu loop; they never abort the process.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid flight selection: {index} (have {count} flights)")]
    FlightSelectionOutOfRange { index: usize, count: usize },

    #[error("invalid booking selection: {index} (have {count} bookings)")]
    BookingSelectionOutOfRange { index: usize, count: usize },

    #[error("no free seats left on flight {flight_no}")]
    FlightFull { flight_no: String },

    #[error("travel date must be after today: {date}")]
    TravelDateNotInFuture { date: String },

    #[error("invalid customer name: {reason}")]
    InvalidCustomerName { reason: String },

    #[error("no seat held on flight {flight_no}, nothing to release")]
    NoSeatToRelease { flight_no: String },

    #[error("flight no longer exists: {flight_no}")]
    FlightNotFound { flight_no: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
