use alloc::{borrow::Cow, rc::Rc, string::String, vec::Vec};

use crate::{coerce, error::ConversionError, object::Object};

/// A dynamically typed element.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Object(Rc<dyn Object>),
}

impl Value {
    /// Wrap a host object.
    pub fn object<T: Object + 'static>(object: T) -> Self {
        Value::Object(Rc::new(object))
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Object(o) => o.class_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&dyn Object> {
        match self {
            Value::Object(o) => Some(o.as_ref()),
            _ => None,
        }
    }

    /// Result of the success query, for objects that expose one.
    ///
    /// `None` means the value has no such capability, which is different from
    /// a failed check.
    pub fn status(&self) -> Option<bool> {
        self.as_object()
            .and_then(Object::as_status)
            .map(|status| status.is_ok())
    }

    /// Loose integer coercion.
    ///
    /// Strings contribute their leading numeric prefix (`"7.5"` is 7,
    /// `"  12abc"` is 12, `"x"` is 0). Floats truncate toward zero and
    /// saturate at the `i64` bounds; NaN is 0. Lists are 0 when empty and 1
    /// otherwise; objects are 1.
    pub fn to_int(&self) -> i64 {
        match self {
            Value::Null => 0,
            Value::Bool(b) => i64::from(*b),
            Value::Int(i) => *i,
            Value::Float(f) => coerce::float_to_int(*f),
            Value::Str(s) => coerce::parse_int_prefix(s),
            Value::List(items) => i64::from(!items.is_empty()),
            Value::Object(_) => 1,
        }
    }

    /// Loose string coercion.
    ///
    /// `true` is `"1"`, `false` and null are empty, lists render as the
    /// literal `"Array"`. Objects use [`Object::to_text`]; an object without
    /// a string form is an error.
    pub fn to_text(&self) -> Result<Cow<'_, str>, ConversionError> {
        Ok(match self {
            Value::Null | Value::Bool(false) => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("1"),
            Value::Int(i) => Cow::Owned(alloc::format!("{i}")),
            Value::Float(f) => Cow::Owned(coerce::format_float(*f)),
            Value::Str(s) => Cow::Borrowed(s.as_str()),
            Value::List(_) => Cow::Borrowed("Array"),
            Value::Object(o) => match o.to_text() {
                Some(text) => Cow::Owned(text),
                None => {
                    return Err(ConversionError::NotStringable {
                        class: o.class_name().into(),
                    });
                }
            },
        })
    }

    /// Loose truthiness.
    ///
    /// Falsy: null, `false`, `0`, `0.0`, `""`, `"0"` and the empty list.
    /// Everything else is truthy, including every object and NaN.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::List(items) => !items.is_empty(),
            Value::Object(_) => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Objects have identity, not structure.
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Object + 'static> From<Rc<T>> for Value {
    fn from(object: Rc<T>) -> Self {
        Value::Object(object)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
