//! CLI layer: argument parsing, menu loop, and terminal output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::run_interactive;
pub use error::{CliError, CliResult};
