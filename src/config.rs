//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (reference fleet)
//! 2. Global config: `$XDG_CONFIG_HOME/flightdesk/flightdesk.toml`
//! 3. Environment variables: `FLIGHTDESK_*` prefix
//!
//! The `--ledger` CLI flag overrides all of these and is applied by the
//! binary after loading.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{Airline, Flight, FlightKind};

/// One fleet entry. `base_price` is the fare before the kind's multiplier
/// is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightSpec {
    pub kind: FlightKind,
    pub flight_no: String,
    pub destination: String,
    pub base_price: f64,
    pub max_seats: u32,
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so unspecified fields inherit from the layer below).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub airline_name: Option<String>,
    pub ledger_path: Option<PathBuf>,
    pub fleet: Option<Vec<FlightSpec>>,
}

/// Unified configuration for flightdesk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Airline operating the fleet
    pub airline_name: String,
    /// Booking ledger file (default: bookings.txt in the working directory)
    pub ledger_path: PathBuf,
    /// Fleet set up at startup, in display order
    pub fleet: Vec<FlightSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            airline_name: "Wizz Air".to_string(),
            ledger_path: PathBuf::from("bookings.txt"),
            fleet: vec![
                FlightSpec {
                    kind: FlightKind::Domestic,
                    flight_no: "DF123".to_string(),
                    destination: "Budapest".to_string(),
                    base_price: 10000.0,
                    max_seats: 10,
                },
                FlightSpec {
                    kind: FlightKind::Domestic,
                    flight_no: "DF456".to_string(),
                    destination: "Debrecen".to_string(),
                    base_price: 8000.0,
                    max_seats: 8,
                },
                FlightSpec {
                    kind: FlightKind::International,
                    flight_no: "IF789".to_string(),
                    destination: "London".to_string(),
                    base_price: 20000.0,
                    max_seats: 5,
                },
            ],
        }
    }
}

/// Get the XDG config directory for flightdesk.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "flightdesk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("flightdesk.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Apply a config file onto self. Scalars win if specified; a specified
    /// fleet REPLACES the compiled one entirely (the defaults are just the
    /// reference fleet, not a baseline to merge into).
    fn apply_file(&self, raw: &RawSettings) -> Self {
        Self {
            airline_name: raw
                .airline_name
                .clone()
                .unwrap_or_else(|| self.airline_name.clone()),
            ledger_path: raw
                .ledger_path
                .clone()
                .unwrap_or_else(|| self.ledger_path.clone()),
            fleet: raw.fleet.clone().unwrap_or_else(|| self.fleet.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults (reference fleet)
    /// 2. Global config: `$XDG_CONFIG_HOME/flightdesk/flightdesk.toml`
    /// 3. Environment variables: `FLIGHTDESK_*` prefix (scalars only)
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.apply_file(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Load settings from a specific config file, skipping the global
    /// lookup (used by tests and by `--config`).
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        let raw = load_raw_settings(path)?;
        let mut settings = Self::default().apply_file(&raw);
        settings = Self::apply_env_overrides(settings)?;
        settings.expand_paths();
        Ok(settings)
    }

    /// Apply FLIGHTDESK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder =
            Config::builder().add_source(Environment::with_prefix("FLIGHTDESK").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("airline_name") {
            settings.airline_name = val;
        }
        if let Ok(val) = config.get_string("ledger_path") {
            settings.ledger_path = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.ledger_path.to_string_lossy().as_ref());
        self.ledger_path = PathBuf::from(expanded);
    }

    /// Build the airline from the configured fleet, applying each kind's
    /// fare multiplier at construction.
    pub fn build_airline(&self) -> Airline {
        let mut airline = Airline::new(self.airline_name.clone());
        for spec in &self.fleet {
            airline.add_flight(Flight::new(
                spec.kind,
                spec.flight_no.clone(),
                spec.destination.clone(),
                spec.base_price,
                spec.max_seats,
            ));
        }
        airline
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# flightdesk configuration
#
# Location: ~/.config/flightdesk/flightdesk.toml
# Scalars can also be set via FLIGHTDESK_* environment variables;
# a fleet specified here replaces the compiled reference fleet entirely.

# airline_name = "Wizz Air"

# Booking ledger file (supports ~ and $VAR)
# ledger_path = "bookings.txt"

# [[fleet]]
# kind = "domestic"          # fare = base_price * 0.8
# flight_no = "DF123"
# destination = "Budapest"
# base_price = 10000.0
# max_seats = 10

# [[fleet]]
# kind = "international"     # fare = base_price * 1.5
# flight_no = "IF789"
# destination = "London"
# base_price = 20000.0
# max_seats = 5
"#
        .to_string()
    }
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}`, and `~`. Uses shellexpand for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
