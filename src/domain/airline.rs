//! Airline: the owning, ordered collection of flights

use crate::domain::{Flight, FlightRef};

/// An airline owns its flights exclusively. Insertion order is display
/// order and drives index-based selection in the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Airline {
    name: String,
    flights: Vec<Flight>,
}

impl Airline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a flight. No duplicate check; lookups take the first match,
    /// so callers should keep flight numbers unique.
    pub fn add_flight(&mut self, flight: Flight) {
        self.flights.push(flight);
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn flight(&self, index: usize) -> Option<&Flight> {
        self.flights.get(index)
    }

    pub fn flight_mut(&mut self, index: usize) -> Option<&mut Flight> {
        self.flights.get_mut(index)
    }

    /// First flight matching the reference (flight number + destination).
    pub fn find_flight(&self, flight_ref: &FlightRef) -> Option<&Flight> {
        self.flights.iter().find(|f| {
            f.flight_no() == flight_ref.flight_no && f.destination() == flight_ref.destination
        })
    }

    pub fn find_flight_mut(&mut self, flight_ref: &FlightRef) -> Option<&mut Flight> {
        self.flights.iter_mut().find(|f| {
            f.flight_no() == flight_ref.flight_no && f.destination() == flight_ref.destination
        })
    }

    /// One formatted line per flight, in insertion order. The menu numbers
    /// these 1-based.
    pub fn flight_summaries(&self) -> Vec<String> {
        self.flights.iter().map(Flight::summary).collect()
    }
}
