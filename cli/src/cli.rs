//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// respseq - inspect and reshape batches of service results
///
/// Input is a JSON array, or a JSON object keyed by non-negative integers
/// for sparse input. Objects with a numeric `status` field are treated as
/// responses.
#[derive(Parser, Debug)]
#[command(name = "respseq", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Coerce every element to an integer
    Ints(InputArgs),

    /// Coerce every element to a string, optionally filtering by pattern
    Strings(StringsArgs),

    /// Check that every response succeeded (exit status 1 if not)
    AreOk(InputArgs),

    /// Print the element with the lowest index, or `false`
    First(InputArgs),

    /// Print the element in the last position, or `false`
    Last(InputArgs),

    /// Print the number of elements
    Len(InputArgs),

    /// Drop null, false, 0, "" and other falsy elements
    Compress(InputArgs),

    /// Renumber elements from zero
    Reindex(InputArgs),

    /// Print the sequence as read
    Show(InputArgs),
}

/// Input source shared by every command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON file to read (`-` for stdin)
    #[arg(default_value = "-")]
    pub file: String,
}

/// Arguments for the `strings` command.
#[derive(Args, Debug)]
pub struct StringsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep only strings matching this pattern, e.g. `/^i-/i`
    #[arg(long, short)]
    pub pattern: Option<String>,
}
