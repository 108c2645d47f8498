//! Error handling utilities for the CLI.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[diagnostic(code(respseq::io))]
    #[error("cannot read {name}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[diagnostic(code(respseq::json))]
    #[error("{name} is not valid JSON")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[diagnostic(
        code(respseq::not_a_sequence),
        help("input must be a JSON array, or an object keyed by non-negative integers")
    )]
    #[error("{name}: expected a JSON array or object, found {found}")]
    NotASequence { name: String, found: &'static str },

    #[diagnostic(
        code(respseq::invalid_index),
        help("object keys are element indices and must be non-negative integers")
    )]
    #[error("{name}: `{key}` is not a valid index")]
    InvalidIndex { name: String, key: String },

    #[diagnostic(transparent)]
    #[error(transparent)]
    Sequence(#[from] respseq::Error),
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let theme = if no_color {
        GraphicalTheme::unicode_nocolor()
    } else {
        GraphicalTheme::unicode()
    };
    let mut rendered = String::new();
    match GraphicalReportHandler::new_themed(theme).render_report(&mut rendered, &error) {
        Ok(()) => eprint!("{rendered}"),
        Err(_) => eprintln!("error: {error}"),
    }
    std::process::exit(1);
}
