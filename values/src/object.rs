use alloc::string::String;
use core::fmt;

/// The success query exposed by response-like objects.
///
/// Only objects that return `Some` from [`Object::as_status`] take part in
/// aggregate success checks; everything else is ignored by them.
pub trait Status {
    fn is_ok(&self) -> bool;
}

/// An opaque host object stored inside a [`Value`](crate::Value).
///
/// Objects are shared, never copied: cloning a value that holds an object
/// clones the `Rc`, not the object.
pub trait Object: fmt::Debug {
    /// Name used in diagnostics and conversion errors.
    fn class_name(&self) -> &str;

    /// String form of the object, if it has one.
    fn to_text(&self) -> Option<String> {
        None
    }

    /// The success-query capability, if this object has one.
    fn as_status(&self) -> Option<&dyn Status> {
        None
    }
}
