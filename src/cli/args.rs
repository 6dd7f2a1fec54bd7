//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Single-airline flight inventory: seat booking, cancellation, and a
/// flat-file booking ledger. Interaction is menu-driven; the flags below
/// only configure the session.
#[derive(Parser, Debug)]
#[command(name = "flightdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output (-d info, -dd debug, -ddd trace)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,

    /// Booking ledger file (overrides config and environment)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub ledger: Option<PathBuf>,

    /// Load settings from a specific config file instead of the global one
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print a config template and exit
    #[arg(long)]
    pub template: bool,

    /// Print program info
    #[arg(long)]
    pub info: bool,
}
