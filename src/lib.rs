//! flightdesk: single-airline seat inventory with a flat-file booking ledger
//!
//! Layered after the usual pattern: `domain` holds the entities and business
//! rules, `application` the workflows over I/O boundary traits,
//! `infrastructure` the real I/O and wiring, `cli` the menu-driven surface.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
