//! Error type for sequence operations.
//!
//! Empty sequences are never an error: operations define an outcome for
//! them. Errors come only from malformed patterns and from values that
//! cannot be coerced to strings.

use miette::Diagnostic;
use respseq_values::ConversionError;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[diagnostic(
        code(respseq::invalid_pattern),
        help("patterns use Rust `regex` syntax, optionally wrapped in delimiters such as `/^a/i`")
    )]
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[diagnostic(
        code(respseq::unknown_modifier),
        help("supported modifiers are `i`, `m`, `s`, `x`, `U` and `u`")
    )]
    #[error("unknown modifier `{modifier}` in pattern `{pattern}`")]
    UnknownModifier { pattern: String, modifier: char },

    #[diagnostic(code(respseq::conversion))]
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
