//! CLI argument definitions using clap
//!
//! Commands:
//! - promosuite serve [--config <path>] [--host <host>] [--port <port>]
//! - promosuite config [--config <path>] [--host <host>] [--port <port>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// PromoSuite AI Backend - image enhancement and layout optimization service
#[derive(Parser, Debug)]
#[command(name = "promosuite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where the server configuration comes from
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to, overrides the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        args: ConfigArgs,
    },

    /// Print the effective configuration as JSON and exit
    Config {
        #[command(flatten)]
        args: ConfigArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
