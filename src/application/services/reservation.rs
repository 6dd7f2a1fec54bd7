//! Booking and cancellation workflows
//!
//! Owns the live airline and the active booking list, and keeps both in
//! step with the ledger file: every committed mutation is persisted before
//! it is confirmed, and rolled back if persisting fails.
//!
//! ```text
//! booking:      SELECT_FLIGHT -> CHECK_AVAILABILITY -> VALIDATE_DATE
//!               -> COMMIT_SEAT -> PERSIST -> CONFIRMED
//! cancellation: SELECT_BOOKING -> RELEASE_SEAT -> REMOVE_FROM_ACTIVE_LIST
//!               -> PERSIST -> CONFIRMED
//! ```

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::application::services::{LedgerService, LoadReport};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Airline, Booking, FIELD_SEPARATOR};

/// Outcome of a confirmed booking or cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub customer_name: String,
    pub flight_no: String,
    pub destination: String,
    pub travel_date: String,
    pub seats_left: u32,
}

/// The collaborator boundary the menu loop consumes.
pub struct ReservationService {
    airline: Airline,
    bookings: Vec<Booking>,
    ledger: LedgerService,
    ledger_path: PathBuf,
}

impl ReservationService {
    pub fn new(airline: Airline, ledger: LedgerService, ledger_path: PathBuf) -> Self {
        Self {
            airline,
            bookings: Vec::new(),
            ledger,
            ledger_path,
        }
    }

    /// Populate the active booking list from the ledger (startup).
    /// Returns the number of skipped lines.
    pub fn load_ledger(&mut self) -> ApplicationResult<usize> {
        let LoadReport {
            bookings,
            skipped_lines,
        } = self.ledger.load(&self.ledger_path, &self.airline)?;
        self.bookings = bookings;
        Ok(skipped_lines)
    }

    pub fn airline(&self) -> &Airline {
        &self.airline
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Numbered-menu flight lines, in fleet order.
    pub fn flight_summaries(&self) -> Vec<String> {
        self.airline.flight_summaries()
    }

    /// One line per active booking, in booking order (ledger line format).
    pub fn booking_summaries(&self) -> Vec<String> {
        self.bookings
            .iter()
            .map(|b| match self.airline.find_flight(b.flight()) {
                Some(flight) => b.to_ledger_line(flight),
                None => format!(
                    "{}{sep}{}{sep}{}{sep}?{sep}{}",
                    b.customer_name(),
                    b.flight().flight_no,
                    b.flight().destination,
                    b.travel_date(),
                    sep = FIELD_SEPARATOR,
                ),
            })
            .collect()
    }

    /// Book one seat for `customer_name` on the flight at `flight_index`
    /// (zero-based), travelling on `travel_date` (`YYYY-MM-DD`).
    ///
    /// Rejections: index out of range, flight full, malformed date, date not
    /// strictly in the future, customer name unfit for the ledger format.
    /// The seat is only held once the ledger write succeeds.
    #[instrument(skip(self))]
    pub fn attempt_booking(
        &mut self,
        customer_name: &str,
        flight_index: usize,
        travel_date: &str,
    ) -> ApplicationResult<Confirmation> {
        validate_customer_name(customer_name)?;

        // SELECT_FLIGHT
        let count = self.airline.len();
        let Some(flight) = self.airline.flight_mut(flight_index) else {
            return Err(ApplicationError::FlightSelectionOutOfRange {
                index: flight_index,
                count,
            });
        };

        // CHECK_AVAILABILITY
        if !flight.is_available() {
            return Err(ApplicationError::FlightFull {
                flight_no: flight.flight_no().to_string(),
            });
        }

        // VALIDATE_DATE (checked once, here; never re-checked on reload)
        let booking = Booking::new(customer_name, flight.reference(), travel_date);
        if !booking.is_date_valid()? {
            return Err(ApplicationError::TravelDateNotInFuture {
                date: travel_date.to_string(),
            });
        }

        // COMMIT_SEAT
        if !flight.book_seat() {
            return Err(ApplicationError::FlightFull {
                flight_no: flight.flight_no().to_string(),
            });
        }
        let confirmation = Confirmation {
            customer_name: customer_name.to_string(),
            flight_no: flight.flight_no().to_string(),
            destination: flight.destination().to_string(),
            travel_date: travel_date.to_string(),
            seats_left: flight.seats_left(),
        };
        self.bookings.push(booking);

        // PERSIST, rolling the seat and the booking back on failure
        if let Err(e) = self
            .ledger
            .save(&self.ledger_path, &self.bookings, &self.airline)
        {
            self.bookings.pop();
            if let Some(flight) = self.airline.flight_mut(flight_index) {
                flight.cancel_seat();
            }
            return Err(e);
        }

        debug!(
            "booked {} on {} ({} seats left)",
            confirmation.customer_name, confirmation.flight_no, confirmation.seats_left
        );
        Ok(confirmation)
    }

    /// Cancel the booking at `booking_index` (zero-based), releasing its
    /// seat and removing it from the active list.
    ///
    /// Rejections: index out of range, seat count already zero (possible for
    /// bookings reloaded onto a fresh fleet, see DESIGN.md). The booking is
    /// only removed once the ledger write succeeds.
    #[instrument(skip(self))]
    pub fn attempt_cancellation(&mut self, booking_index: usize) -> ApplicationResult<Confirmation> {
        // SELECT_BOOKING
        if booking_index >= self.bookings.len() {
            return Err(ApplicationError::BookingSelectionOutOfRange {
                index: booking_index,
                count: self.bookings.len(),
            });
        }
        let flight_ref = self.bookings[booking_index].flight().clone();

        // RELEASE_SEAT
        let flight = self.airline.find_flight_mut(&flight_ref).ok_or_else(|| {
            ApplicationError::FlightNotFound {
                flight_no: flight_ref.flight_no.clone(),
            }
        })?;
        if !flight.cancel_seat() {
            return Err(ApplicationError::NoSeatToRelease {
                flight_no: flight_ref.flight_no.clone(),
            });
        }
        let seats_left = flight.seats_left();

        // REMOVE_FROM_ACTIVE_LIST
        let removed = self.bookings.remove(booking_index);
        let confirmation = Confirmation {
            customer_name: removed.customer_name().to_string(),
            flight_no: flight_ref.flight_no.clone(),
            destination: flight_ref.destination.clone(),
            travel_date: removed.travel_date().to_string(),
            seats_left,
        };

        // PERSIST, re-seating the booking on failure
        if let Err(e) = self
            .ledger
            .save(&self.ledger_path, &self.bookings, &self.airline)
        {
            self.bookings.insert(booking_index, removed);
            if let Some(flight) = self.airline.find_flight_mut(&flight_ref) {
                flight.book_seat();
            }
            return Err(e);
        }

        debug!(
            "cancelled booking for {} on {}",
            confirmation.customer_name, confirmation.flight_no
        );
        Ok(confirmation)
    }
}

/// Customer names become the first ledger field; reject input that would
/// corrupt the unescaped format.
fn validate_customer_name(name: &str) -> ApplicationResult<()> {
    if name.trim().is_empty() {
        return Err(ApplicationError::InvalidCustomerName {
            reason: "name must not be empty".to_string(),
        });
    }
    if name.contains(FIELD_SEPARATOR) {
        return Err(ApplicationError::InvalidCustomerName {
            reason: format!("name must not contain '{}'", FIELD_SEPARATOR),
        });
    }
    Ok(())
}
