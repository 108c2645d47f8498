//! Dynamically typed values for response post-processing.
//!
//! A [`Value`] is one element of a heterogeneous sequence: a scalar, a
//! string, a nested list, or an opaque host [`Object`]. Every value supports
//! the same loose coercions (see [`Value::to_int`], [`Value::to_text`] and
//! [`Value::is_truthy`]), so callers can treat mixed API results uniformly.
//!
//! # Example
//!
//! ```
//! use respseq_values::{Response, Value};
//!
//! let v = Value::from("42 items");
//! assert_eq!(v.to_int(), 42);
//!
//! let r = Value::object(Response::new(503));
//! assert_eq!(r.status(), Some(false));
//! assert_eq!(Value::from(7).status(), None);
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

mod coerce;
mod error;
mod object;
mod response;
mod value;

pub use error::ConversionError;
pub use object::{Object, Status};
pub use response::Response;
pub use value::Value;
