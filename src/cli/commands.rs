//! CLI command implementations

use std::io::{self, Write};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::{Command, ConfigArgs};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { args } => serve(&args),
        Command::Config { args } => print_config(&args, &mut io::stdout()),
    }
}

/// Build the effective configuration: defaults, then file, then flags
pub fn resolve_config(args: &ConfigArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let config = HttpServerConfig::load(path)?;
            let path = path.display().to_string();
            log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);
            config
        }
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it exits
pub fn serve(args: &ConfigArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    let result = rt.block_on(server.start());
    match result {
        Ok(()) => {
            log_event(Event::ServerStop);
            Ok(())
        }
        Err(e) => {
            let reason = e.to_string();
            log_event_with_fields(Event::ServerFailed, &[("reason", reason.as_str())]);
            Err(CliError::boot_failed(format!("HTTP server failed: {}", e)))
        }
    }
}

/// Write the effective configuration as pretty JSON
pub fn print_config<W: Write>(args: &ConfigArgs, out: &mut W) -> CliResult<()> {
    let config = resolve_config(args)?;
    serde_json::to_writer_pretty(&mut *out, &config)?;
    writeln!(out)?;
    Ok(())
}
