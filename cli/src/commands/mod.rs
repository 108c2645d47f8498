//! Command implementations.
//!
//! Each command loads its input with [`load`], runs one sequence operation
//! and prints a single line of JSON.

pub mod inspect;
pub mod transform;

use respseq::TypedSequence;

use crate::cli::InputArgs;
use crate::common::{CliResult, input::read_input, json::parse_sequence};

/// Read and parse the input named by `args`.
pub fn load(args: &InputArgs) -> CliResult<TypedSequence> {
    let (content, name) = read_input(&args.file)?;
    let seq = parse_sequence(&content, &name)?;
    tracing::debug!(input = %name, len = seq.len(), contiguous = seq.is_contiguous(), "loaded sequence");
    Ok(seq)
}

/// Print one JSON document on its own line.
pub fn emit(json: &serde_json::Value) {
    println!("{json}");
}
