//! Interactive menu loop
//!
//! Thin collaborator over the reservation service: reads a choice, calls
//! into the service, renders the result. Menu numbering is 1-based; the
//! service works with zero-based indices.

use std::io;

use tracing::debug;

use crate::application::services::ReservationService;
use crate::application::ApplicationError;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run the menu loop until the user exits or input ends.
pub fn run_interactive(container: &ServiceContainer) -> CliResult<()> {
    let mut service = container.reservation_service();
    let skipped = service.load_ledger().map_err(InfraError::from)?;
    if skipped > 0 {
        output::warning(&format!("skipped {} unusable ledger lines", skipped));
    }

    output::header(&format!(
        "Welcome to the {} flight booking system!",
        service.airline().name()
    ));

    loop {
        output::info("");
        output::info("Choose one of the following:");
        output::info("1. Book a ticket");
        output::info("2. Cancel a booking");
        output::info("3. List bookings");
        output::info("4. Exit");

        let Some(choice) = read_input(container, "Your choice:")? else {
            break;
        };
        match choice.as_str() {
            "1" => book(container, &mut service)?,
            "2" => cancel(container, &mut service)?,
            "3" => list(&service),
            "4" => {
                output::info("Goodbye!");
                break;
            }
            other => {
                debug!("unknown menu choice: {:?}", other);
                output::failure("Invalid choice, try again.");
            }
        }
    }
    Ok(())
}

fn book(container: &ServiceContainer, service: &mut ReservationService) -> CliResult<()> {
    let Some(name) = read_input(container, "Please enter your name:")? else {
        return Ok(());
    };

    for (i, line) in service.flight_summaries().iter().enumerate() {
        output::info(&format!("{}. {}", i + 1, line));
    }
    let Some(selection) = read_input(container, "Select a flight:")? else {
        return Ok(());
    };
    let Some(index) = parse_selection(&selection) else {
        output::failure("Invalid flight selection.");
        return Ok(());
    };

    // Pre-check so the date is not asked for on a full flight; the service
    // re-checks before committing.
    match service.airline().flight(index) {
        None => {
            output::failure("Invalid flight selection.");
            return Ok(());
        }
        Some(flight) if !flight.is_available() => {
            output::failure("No free seats left on the selected flight.");
            return Ok(());
        }
        Some(_) => {}
    }

    let Some(date) = read_input(container, "Enter the travel date (YYYY-MM-DD):")? else {
        return Ok(());
    };

    match service.attempt_booking(&name, index, &date) {
        Ok(c) => output::success(&format!(
            "Booking confirmed: {} on {} to {}, travelling {}.",
            c.customer_name, c.flight_no, c.destination, c.travel_date
        )),
        Err(e) => report_rejection(e),
    }
    Ok(())
}

fn cancel(container: &ServiceContainer, service: &mut ReservationService) -> CliResult<()> {
    if service.bookings().is_empty() {
        output::info("No bookings.");
        return Ok(());
    }

    for (i, line) in service.booking_summaries().iter().enumerate() {
        output::info(&format!("{}. {}", i + 1, line));
    }
    let Some(selection) = read_input(container, "Select the booking to cancel:")? else {
        return Ok(());
    };
    let Some(index) = parse_selection(&selection) else {
        output::failure("Invalid booking selection.");
        return Ok(());
    };

    match service.attempt_cancellation(index) {
        Ok(c) => output::success(&format!(
            "Booking cancelled: {} on {} to {}.",
            c.customer_name, c.flight_no, c.destination
        )),
        Err(e) => report_rejection(e),
    }
    Ok(())
}

fn list(service: &ReservationService) {
    let summaries = service.booking_summaries();
    if summaries.is_empty() {
        output::info("No bookings.");
        return;
    }
    output::header("Current bookings:");
    for line in summaries {
        output::detail(&line);
    }
}

/// Rejections keep the loop alive; real failures are shown as errors but
/// also keep it alive (nothing in the core is fatal).
fn report_rejection(err: ApplicationError) {
    match err {
        ApplicationError::OperationFailed { .. } | ApplicationError::Config { .. } => {
            output::error(&err)
        }
        other => output::failure(&other.to_string()),
    }
}

/// Convert a 1-based menu answer to a zero-based index.
fn parse_selection(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

fn read_input(container: &ServiceContainer, prompt: &str) -> CliResult<Option<String>> {
    container
        .prompter
        .read_line(prompt)
        .map_err(|e: io::Error| InfraError::io("read input", e).into())
}
