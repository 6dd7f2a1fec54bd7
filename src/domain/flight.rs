//! Flights: fare policy, capacity, and seat occupancy

use serde::{Deserialize, Serialize};

/// Flight category. Affects the fare multiplier applied at construction
/// and the display label, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightKind {
    Domestic,
    International,
}

impl FlightKind {
    /// Multiplier applied to the base fare when the flight is created.
    pub fn fare_multiplier(&self) -> f64 {
        match self {
            FlightKind::Domestic => 0.8,
            FlightKind::International => 1.5,
        }
    }

    /// Label used in flight summaries.
    pub fn label(&self) -> &'static str {
        match self {
            FlightKind::Domestic => "Domestic flight",
            FlightKind::International => "International flight",
        }
    }
}

/// Identity key linking a booking to a flight.
///
/// Bookings hold this key instead of a reference into the airline's flight
/// list, so ownership of flights stays single-rooted at the `Airline`.
/// Resolution matches on flight number AND destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRef {
    pub flight_no: String,
    pub destination: String,
}

/// One flight: fare and capacity, with a running booked-seat count.
///
/// Price and capacity are fixed at construction; `booked_seats` only moves
/// through `book_seat` / `cancel_seat`, which maintain
/// `0 <= booked_seats <= max_seats`.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    kind: FlightKind,
    flight_no: String,
    destination: String,
    price: f64,
    max_seats: u32,
    booked_seats: u32,
}

impl Flight {
    /// Create a flight. The stored price is `base_price` adjusted by the
    /// kind's fare multiplier; it never changes afterwards.
    pub fn new(
        kind: FlightKind,
        flight_no: impl Into<String>,
        destination: impl Into<String>,
        base_price: f64,
        max_seats: u32,
    ) -> Self {
        Self {
            kind,
            flight_no: flight_no.into(),
            destination: destination.into(),
            price: base_price * kind.fare_multiplier(),
            max_seats,
            booked_seats: 0,
        }
    }

    pub fn kind(&self) -> FlightKind {
        self.kind
    }

    pub fn flight_no(&self) -> &str {
        &self.flight_no
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Fare-adjusted ticket price.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn max_seats(&self) -> u32 {
        self.max_seats
    }

    pub fn booked_seats(&self) -> u32 {
        self.booked_seats
    }

    pub fn seats_left(&self) -> u32 {
        self.max_seats - self.booked_seats
    }

    /// True while at least one seat is free.
    pub fn is_available(&self) -> bool {
        self.booked_seats < self.max_seats
    }

    /// Take one seat. Returns false (and leaves the count untouched) when
    /// the flight is full.
    pub fn book_seat(&mut self) -> bool {
        if self.is_available() {
            self.booked_seats += 1;
            true
        } else {
            false
        }
    }

    /// Release one seat. Returns false (and leaves the count untouched)
    /// when no seat is held.
    pub fn cancel_seat(&mut self) -> bool {
        if self.booked_seats > 0 {
            self.booked_seats -= 1;
            true
        } else {
            false
        }
    }

    /// Identity key for bookings referencing this flight.
    pub fn reference(&self) -> FlightRef {
        FlightRef {
            flight_no: self.flight_no.clone(),
            destination: self.destination.clone(),
        }
    }

    /// One-line summary for menu display.
    pub fn summary(&self) -> String {
        format!(
            "{} {}, destination: {}, price: {} Ft, seats left: {}",
            self.kind.label(),
            self.flight_no,
            self.destination,
            self.price,
            self.seats_left()
        )
    }
}
