//! Booking ledger persistence
//!
//! Whole-file rewrite on every mutation: one serialized line per booking,
//! in list order. O(n) I/O per operation is accepted at this system's scale
//! (single user, small n) and avoids incremental-append inconsistency.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Airline, Booking};
use crate::infrastructure::traits::FileSystem;

/// Result of loading the ledger.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Resolved bookings, in file order.
    pub bookings: Vec<Booking>,
    /// Lines dropped because they were malformed or referenced a flight
    /// that no longer exists.
    pub skipped_lines: usize,
}

/// Flat-file save/load of booking records.
pub struct LedgerService {
    fs: Arc<dyn FileSystem>,
}

impl LedgerService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Overwrite the ledger with one line per booking, newline-terminated.
    ///
    /// Write failures surface as errors; the caller decides how to recover.
    /// A booking whose flight no longer resolves is skipped with a warning,
    /// mirroring the load side.
    pub fn save(
        &self,
        path: &Path,
        bookings: &[Booking],
        airline: &Airline,
    ) -> ApplicationResult<()> {
        let mut content = String::new();
        for booking in bookings {
            match airline.find_flight(booking.flight()) {
                Some(flight) => {
                    content.push_str(&booking.to_ledger_line(flight));
                    content.push('\n');
                }
                None => {
                    warn!(
                        "save: dropping booking for unknown flight {}",
                        booking.flight().flight_no
                    );
                }
            }
        }

        self.fs
            .ensure_parent(path)
            .with_path_context("create ledger directory", path)?;
        self.fs
            .write(path, &content)
            .with_path_context("write ledger", path)?;
        debug!("save: wrote {} bookings to {}", bookings.len(), path.display());
        Ok(())
    }

    /// Read the ledger and resolve each record against the airline's flights.
    ///
    /// A missing file is a first run and loads empty. Blank, malformed, and
    /// unresolved lines are dropped with a warning and counted; a corrupt or
    /// stale ledger never aborts startup. Seat counts on the flights are not
    /// touched.
    pub fn load(&self, path: &Path, airline: &Airline) -> ApplicationResult<LoadReport> {
        if !self.fs.exists(path) {
            debug!("load: no ledger at {}, starting empty", path.display());
            return Ok(LoadReport::default());
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read ledger", path)?;

        let mut report = LoadReport::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Booking::from_ledger_line(line, airline.flights()) {
                Ok(Some(booking)) => report.bookings.push(booking),
                Ok(None) => {
                    warn!("load: skipping line with unknown flight: {}", line);
                    report.skipped_lines += 1;
                }
                Err(e) => {
                    warn!("load: skipping malformed line: {}", e);
                    report.skipped_lines += 1;
                }
            }
        }

        debug!(
            "load: {} bookings, {} skipped from {}",
            report.bookings.len(),
            report.skipped_lines,
            path.display()
        );
        Ok(report)
    }
}
