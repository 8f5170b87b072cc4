//! CLI module for Deskpet.
//!
//! This module provides the command-line interface: headless simulation
//! against a scene file, one-off stacking passes, and configuration tooling.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::DeskpetError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), DeskpetError> {
    let cli = Cli::parse();
    cli.execute()
}
