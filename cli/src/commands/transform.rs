//! Commands that print a reshaped sequence or a coerced list.

use std::process::ExitCode;

use serde_json::Value as Json;

use super::{emit, load};
use crate::cli::{InputArgs, StringsArgs};
use crate::common::{CliResult, json::sequence_to_json};

pub fn ints(args: InputArgs) -> CliResult<ExitCode> {
    let ints = load(&args)?.map_integer();
    emit(&Json::from(ints));
    Ok(ExitCode::SUCCESS)
}

pub fn strings(args: StringsArgs) -> CliResult<ExitCode> {
    let strings = load(&args.input)?.map_string(args.pattern.as_deref())?;
    emit(&Json::from(strings));
    Ok(ExitCode::SUCCESS)
}

pub fn compress(args: InputArgs) -> CliResult<ExitCode> {
    emit(&sequence_to_json(&load(&args)?.compress()));
    Ok(ExitCode::SUCCESS)
}

pub fn reindex(args: InputArgs) -> CliResult<ExitCode> {
    emit(&sequence_to_json(&load(&args)?.reindex()));
    Ok(ExitCode::SUCCESS)
}

pub fn show(args: InputArgs) -> CliResult<ExitCode> {
    emit(&sequence_to_json(&load(&args)?));
    Ok(ExitCode::SUCCESS)
}
