//! respseq CLI - inspect and reshape batches of service results.

mod cli;
mod commands;
mod common;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};

fn main() -> ExitCode {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Ints(args) => commands::transform::ints(args),
        Command::Strings(args) => commands::transform::strings(args),
        Command::AreOk(args) => commands::inspect::are_ok(args),
        Command::First(args) => commands::inspect::first(args),
        Command::Last(args) => commands::inspect::last(args),
        Command::Len(args) => commands::inspect::len(args),
        Command::Compress(args) => commands::transform::compress(args),
        Command::Reindex(args) => commands::transform::reindex(args),
        Command::Show(args) => commands::transform::show(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => common::error::render_and_exit(e, cli.no_color),
    }
}
