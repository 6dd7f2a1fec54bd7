//! Tests for flight fare policy, availability, and seat occupancy

use rstest::rstest;

use flightdesk::domain::{Airline, Flight, FlightKind, FlightRef};

fn domestic(max_seats: u32) -> Flight {
    Flight::new(FlightKind::Domestic, "DF123", "Budapest", 10000.0, max_seats)
}

#[rstest]
#[case(FlightKind::Domestic, 10000.0, 8000.0)]
#[case(FlightKind::International, 20000.0, 30000.0)]
fn given_base_price_when_creating_flight_then_fare_multiplier_is_applied(
    #[case] kind: FlightKind,
    #[case] base_price: f64,
    #[case] expected: f64,
) {
    // Act
    let flight = Flight::new(kind, "XX1", "Somewhere", base_price, 5);

    // Assert
    assert_eq!(flight.price(), expected);
}

#[test]
fn given_fresh_flight_when_booking_then_seat_count_increments() {
    // Arrange
    let mut flight = domestic(10);
    assert!(flight.is_available());

    // Act
    let booked = flight.book_seat();

    // Assert
    assert!(booked);
    assert_eq!(flight.booked_seats(), 1);
    assert_eq!(flight.seats_left(), 9);
}

#[test]
fn given_single_seat_flight_when_booked_once_then_second_attempt_fails() {
    // Arrange
    let mut flight = domestic(1);

    // Act
    let first = flight.book_seat();
    let second = flight.book_seat();

    // Assert
    assert!(first);
    assert!(!flight.is_available());
    assert!(!second, "full flight must reject the booking");
    assert_eq!(flight.booked_seats(), 1, "failed booking must not mutate");
}

#[test]
fn given_empty_flight_when_cancelling_then_fails_without_mutation() {
    // Arrange
    let mut flight = domestic(10);

    // Act
    let cancelled = flight.cancel_seat();

    // Assert
    assert!(!cancelled);
    assert_eq!(flight.booked_seats(), 0);
}

#[test]
fn given_any_book_cancel_sequence_then_seat_count_stays_within_bounds() {
    // Arrange - a mixed sequence with more operations than seats
    let mut flight = domestic(3);
    let ops = [
        true, true, false, true, true, true, false, false, false, false, true,
    ];

    // Act / Assert - invariant holds after every step
    for &book in &ops {
        if book {
            flight.book_seat();
        } else {
            flight.cancel_seat();
        }
        assert!(flight.booked_seats() <= flight.max_seats());
    }
}

#[rstest]
#[case(FlightKind::Domestic, "Domestic flight")]
#[case(FlightKind::International, "International flight")]
fn given_flight_kind_when_summarizing_then_label_prefixes_line(
    #[case] kind: FlightKind,
    #[case] label: &str,
) {
    // Arrange
    let flight = Flight::new(kind, "XX1", "Somewhere", 1000.0, 5);

    // Act
    let summary = flight.summary();

    // Assert
    assert!(
        summary.starts_with(label),
        "summary should start with {:?}: {}",
        label,
        summary
    );
    assert!(summary.contains("XX1"));
    assert!(summary.contains("Somewhere"));
    assert!(summary.contains("seats left: 5"));
}

#[test]
fn given_airline_when_listing_summaries_then_insertion_order_is_kept() {
    // Arrange
    let mut airline = Airline::new("Wizz Air");
    airline.add_flight(domestic(10));
    airline.add_flight(Flight::new(
        FlightKind::International,
        "IF789",
        "London",
        20000.0,
        5,
    ));

    // Act
    let summaries = airline.flight_summaries();

    // Assert
    assert_eq!(summaries.len(), 2);
    assert!(summaries[0].contains("DF123"));
    assert!(summaries[1].contains("IF789"));
}

#[test]
fn given_same_flight_no_with_other_destination_when_resolving_then_no_match() {
    // Arrange - resolution joins on flight number AND destination
    let mut airline = Airline::new("Wizz Air");
    airline.add_flight(domestic(10));

    // Act
    let miss = airline.find_flight(&FlightRef {
        flight_no: "DF123".to_string(),
        destination: "Vienna".to_string(),
    });
    let hit = airline.find_flight(&FlightRef {
        flight_no: "DF123".to_string(),
        destination: "Budapest".to_string(),
    });

    // Assert
    assert!(miss.is_none());
    assert!(hit.is_some());
}
