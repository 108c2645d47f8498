//! respseq - ergonomic post-processing of service responses
//!
//! # Overview
//!
//! Client libraries often return a batch of heterogeneous results: status
//! objects, strings, numbers, nulls. [`TypedSequence`] wraps such a batch and
//! offers a fixed set of operations to inspect and reshape it:
//!
//! - coercing maps: [`map_integer`](TypedSequence::map_integer),
//!   [`map_string`](TypedSequence::map_string)
//! - callbacks: [`each`](TypedSequence::each), [`map`](TypedSequence::map),
//!   [`filter`](TypedSequence::filter) and their `_with` accumulator variants
//! - aggregate success: [`are_ok`](TypedSequence::are_ok)
//! - access: [`first`](TypedSequence::first), [`last`](TypedSequence::last)
//! - normalization: [`compress`](TypedSequence::compress),
//!   [`reindex`](TypedSequence::reindex)
//!
//! # Quick Start
//!
//! ```
//! use respseq::TypedSequence;
//! use respseq::values::{Response, Value};
//!
//! let batch = TypedSequence::from_values([
//!     Value::object(Response::new(200).with_body("a")),
//!     Value::object(Response::new(204)),
//!     Value::Null,
//! ]);
//! assert!(batch.are_ok());
//!
//! let bodies = batch.compress().map_string(Some("/./")).unwrap();
//! assert_eq!(bodies, vec!["a"]);
//! ```
//!
//! # Threading
//!
//! Values share host objects through `Rc`, so sequences are neither `Send`
//! nor `Sync`. Callback accumulators are plain `&mut` borrows.

pub mod error;
pub mod options;
pub mod pattern;
pub mod sequence;

pub use error::{Error, Result};
pub use options::{IteratorKind, SequenceFlags, SequenceOptions};
pub use pattern::compile_pattern;
pub use sequence::{FALSE, Iter, TypedSequence};

pub use respseq_values as values;

/// Everything needed to build and consume sequences.
pub mod prelude {
    pub use crate::{SequenceOptions, TypedSequence};
    pub use respseq_values::{Object, Response, Status, Value};
}
