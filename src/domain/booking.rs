//! Bookings: customer, flight reference, travel date, and the ledger
//! line format
//!
//! A booking corresponds to exactly one seat held on its flight. It holds a
//! `FlightRef` lookup key rather than a pointer, and flattens to a single
//! comma-joined ledger line:
//!
//! ```text
//! <customer_name>,<flight_number>,<destination>,<ticket_price>,<travel_date>
//! ```

use chrono::{Local, NaiveDate};

use crate::domain::{DomainError, DomainResult, Flight, FlightRef};

/// Calendar format for travel dates (ISO `YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field separator of the ledger line format. Embedded separators are not
/// escaped, so field values must not contain it.
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in a ledger line.
const FIELD_COUNT: usize = 5;

/// One seat held for a customer on a flight, on a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    customer_name: String,
    flight: FlightRef,
    travel_date: String,
}

impl Booking {
    pub fn new(
        customer_name: impl Into<String>,
        flight: FlightRef,
        travel_date: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            flight,
            travel_date: travel_date.into(),
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn flight(&self) -> &FlightRef {
        &self.flight
    }

    /// Travel date as entered (ISO `YYYY-MM-DD`).
    pub fn travel_date(&self) -> &str {
        &self.travel_date
    }

    /// Parse the stored travel date.
    pub fn parse_travel_date(&self) -> DomainResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.travel_date, DATE_FORMAT).map_err(|_| {
            DomainError::InvalidDateFormat {
                value: self.travel_date.clone(),
            }
        })
    }

    /// True iff the travel date is strictly after `today`.
    /// Errors when the stored date does not parse.
    pub fn is_valid_on(&self, today: NaiveDate) -> DomainResult<bool> {
        Ok(self.parse_travel_date()? > today)
    }

    /// True iff the travel date is strictly in the future (local date).
    ///
    /// Checked once at booking time; bookings reloaded from the ledger after
    /// their travel date has passed are kept as-is.
    pub fn is_date_valid(&self) -> DomainResult<bool> {
        self.is_valid_on(Local::now().date_naive())
    }

    /// Flatten to a ledger line. The price is taken from the live flight;
    /// it is stored for readability and never read back (see DESIGN.md).
    pub fn to_ledger_line(&self, flight: &Flight) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.customer_name,
            self.flight.flight_no,
            self.flight.destination,
            flight.price(),
            self.travel_date,
            sep = FIELD_SEPARATOR,
        )
    }

    /// Parse a ledger line and resolve its flight against `flights`.
    ///
    /// Returns `Ok(None)` when no flight matches on both flight number and
    /// destination; the ledger loader drops such lines. A wrong field count
    /// is an error. The stored price field is ignored.
    pub fn from_ledger_line(line: &str, flights: &[Flight]) -> DomainResult<Option<Booking>> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(DomainError::MalformedLedgerLine {
                line: line.to_string(),
                reason: format!("expected {} fields, got {}", FIELD_COUNT, fields.len()),
            });
        }
        let (customer_name, flight_no, destination, travel_date) =
            (fields[0], fields[1], fields[2], fields[4]);

        let resolved = flights
            .iter()
            .find(|f| f.flight_no() == flight_no && f.destination() == destination);

        Ok(resolved.map(|flight| Booking::new(customer_name, flight.reference(), travel_date)))
    }
}
