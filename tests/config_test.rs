//! Integration tests for Settings loading from a config file
//!
//! Scalars specified in the file win over compiled defaults; a fleet
//! specified in the file replaces the compiled reference fleet entirely.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use flightdesk::config::Settings;
use flightdesk::domain::FlightKind;

#[test]
fn given_config_file_with_fleet_when_loading_then_fleet_replaces_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("flightdesk.toml");
    fs::write(
        &config_path,
        r#"
airline_name = "Test Air"
ledger_path = "ledger/bookings.txt"

[[fleet]]
kind = "international"
flight_no = "TA9"
destination = "Oslo"
base_price = 30000.0
max_seats = 4
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(&config_path).expect("load settings");

    // Assert
    assert_eq!(settings.airline_name, "Test Air");
    assert_eq!(settings.ledger_path, PathBuf::from("ledger/bookings.txt"));
    assert_eq!(settings.fleet.len(), 1, "file fleet replaces the defaults");
    assert_eq!(settings.fleet[0].kind, FlightKind::International);

    // International fare: 30000 * 1.5
    let airline = settings.build_airline();
    assert_eq!(airline.name(), "Test Air");
    assert_eq!(airline.flight(0).unwrap().price(), 45000.0);
}

#[test]
fn given_config_file_without_fleet_when_loading_then_reference_fleet_is_kept() {
    // Arrange - only a scalar is overridden
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("flightdesk.toml");
    fs::write(&config_path, r#"airline_name = "Renamed Air""#).unwrap();

    // Act
    let settings = Settings::load_from(&config_path).expect("load settings");

    // Assert
    assert_eq!(settings.airline_name, "Renamed Air");
    assert_eq!(settings.fleet.len(), 3);
    assert_eq!(settings.fleet[0].flight_no, "DF123");
}

#[test]
fn given_tilde_ledger_path_in_config_when_loading_then_home_is_expanded() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("flightdesk.toml");
    fs::write(&config_path, r#"ledger_path = "~/bookings.txt""#).unwrap();

    // Act
    let settings = Settings::load_from(&config_path).expect("load settings");

    // Assert
    let home = std::env::var("HOME").expect("HOME should be set");
    assert!(settings.ledger_path.to_string_lossy().starts_with(&home));
}

#[test]
fn given_unparsable_config_file_when_loading_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("flightdesk.toml");
    fs::write(&config_path, "fleet = \"not a fleet\"").unwrap();

    // Act
    let result = Settings::load_from(&config_path);

    // Assert
    assert!(result.is_err());
}
