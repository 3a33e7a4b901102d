//! CLI module for the PromoSuite backend
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - config: Print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{print_config, resolve_config, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse process arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
