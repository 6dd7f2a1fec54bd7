//! Tests for booking date validation and the ledger line format

use chrono::{Days, Local, NaiveDate};

use flightdesk::domain::{Booking, DomainError, Flight, FlightKind};

fn flights() -> Vec<Flight> {
    vec![
        Flight::new(FlightKind::Domestic, "DF123", "Budapest", 10000.0, 10),
        Flight::new(FlightKind::International, "IF789", "London", 20000.0, 5),
    ]
}

fn booking_on(date: &str) -> Booking {
    Booking::new("Alice", flights()[0].reference(), date)
}

#[test]
fn given_date_after_today_when_validating_then_valid() {
    // Arrange
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let booking = booking_on("2024-05-11");

    // Act / Assert
    assert!(booking.is_valid_on(today).unwrap());
}

#[test]
fn given_date_equal_to_today_when_validating_then_invalid() {
    // Arrange - strictly-after comparison, today itself is rejected
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let booking = booking_on("2024-05-10");

    // Act / Assert
    assert!(!booking.is_valid_on(today).unwrap());
}

#[test]
fn given_past_date_when_validating_then_invalid() {
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let booking = booking_on("2023-12-31");

    assert!(!booking.is_valid_on(today).unwrap());
}

#[test]
fn given_unparsable_date_when_validating_then_format_error() {
    // Arrange
    let booking = booking_on("next tuesday");

    // Act
    let result = booking.is_date_valid();

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::InvalidDateFormat { .. })
    ));
}

#[test]
fn given_tomorrow_when_validating_against_wall_clock_then_valid() {
    // Arrange - the production path compares against the local date
    let tomorrow = Local::now().date_naive() + Days::new(1);
    let booking = booking_on(&tomorrow.format("%Y-%m-%d").to_string());

    // Act / Assert
    assert!(booking.is_date_valid().unwrap());
}

#[test]
fn given_booking_when_serializing_then_comma_joined_record() {
    // Arrange
    let flights = flights();
    let booking = Booking::new("Alice", flights[0].reference(), "2030-05-01");

    // Act
    let line = booking.to_ledger_line(&flights[0]);

    // Assert - domestic fare: 10000 * 0.8
    assert_eq!(line, "Alice,DF123,Budapest,8000,2030-05-01");
}

#[test]
fn given_serialized_booking_when_deserializing_then_round_trips() {
    // Arrange
    let flights = flights();
    let booking = Booking::new("Bob", flights[1].reference(), "2031-01-15");
    let line = booking.to_ledger_line(&flights[1]);

    // Act
    let restored = Booking::from_ledger_line(&line, &flights)
        .unwrap()
        .expect("flight should resolve");

    // Assert
    assert_eq!(restored, booking);
}

#[test]
fn given_line_with_wrong_field_count_when_deserializing_then_error() {
    // Act
    let result = Booking::from_ledger_line("Alice,DF123,Budapest,8000", &flights());

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::MalformedLedgerLine { .. })
    ));
}

#[test]
fn given_line_referencing_unknown_flight_when_deserializing_then_none() {
    // Act - flight number exists nowhere in the list
    let result = Booking::from_ledger_line("Alice,ZZ999,Nowhere,100,2030-05-01", &flights());

    // Assert - unresolved lines are dropped, not errors
    assert!(result.unwrap().is_none());
}

#[test]
fn given_line_with_known_number_but_other_destination_when_deserializing_then_none() {
    // Arrange - the identity join needs flight number AND destination
    let result = Booking::from_ledger_line("Alice,DF123,Vienna,8000,2030-05-01", &flights());

    assert!(result.unwrap().is_none());
}
