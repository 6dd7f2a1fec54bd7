//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod airline;
pub mod booking;
pub mod error;
pub mod flight;

pub use airline::Airline;
pub use booking::{Booking, DATE_FORMAT, FIELD_SEPARATOR};
pub use error::{DomainError, DomainResult};
pub use flight::{Flight, FlightKind, FlightRef};
