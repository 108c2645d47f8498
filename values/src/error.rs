use alloc::string::String;

use thiserror::Error;

/// Failure to coerce a [`Value`](crate::Value) into another representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The object has no string form.
    #[error("object of class `{class}` could not be converted to string")]
    NotStringable { class: String },
}
