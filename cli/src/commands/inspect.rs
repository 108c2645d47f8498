//! Commands that report on a sequence: `are-ok`, `first`, `last`, `len`.

use std::process::ExitCode;

use serde_json::Value as Json;

use super::{emit, load};
use crate::cli::InputArgs;
use crate::common::{CliResult, json::value_to_json};

pub fn are_ok(args: InputArgs) -> CliResult<ExitCode> {
    let ok = load(&args)?.are_ok();
    emit(&Json::Bool(ok));
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

pub fn first(args: InputArgs) -> CliResult<ExitCode> {
    let seq = load(&args)?;
    emit(&value_to_json(seq.first()));
    Ok(ExitCode::SUCCESS)
}

pub fn last(args: InputArgs) -> CliResult<ExitCode> {
    let seq = load(&args)?;
    emit(&value_to_json(seq.last()));
    Ok(ExitCode::SUCCESS)
}

pub fn len(args: InputArgs) -> CliResult<ExitCode> {
    let seq = load(&args)?;
    emit(&Json::from(seq.len()));
    Ok(ExitCode::SUCCESS)
}
