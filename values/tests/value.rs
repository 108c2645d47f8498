use std::rc::Rc;

use pretty_assertions::assert_eq;
use respseq_values::{ConversionError, Object, Response, Status, Value};

/// An object with neither a string form nor a success query.
#[derive(Debug)]
struct Opaque;

impl Object for Opaque {
    fn class_name(&self) -> &str {
        "Opaque"
    }
}

/// A stringable object with a custom success rule.
#[derive(Debug)]
struct Job {
    name: &'static str,
    done: bool,
}

impl Status for Job {
    fn is_ok(&self) -> bool {
        self.done
    }
}

impl Object for Job {
    fn class_name(&self) -> &str {
        "Job"
    }

    fn to_text(&self) -> Option<String> {
        Some(self.name.to_string())
    }

    fn as_status(&self) -> Option<&dyn Status> {
        Some(self)
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7u8), Value::Int(7));
    assert_eq!(Value::from(-7i32), Value::Int(-7));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from("a"), Value::Str("a".into()));
    assert_eq!(Value::from(String::from("b")), Value::Str("b".into()));
    assert_eq!(Value::from(()), Value::Null);
}

#[test]
fn from_option_and_vec() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Int(3));
    assert_eq!(
        Value::from(vec![1, 2]),
        Value::List(vec![Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn default_is_null() {
    assert!(Value::default().is_null());
}

#[test]
fn objects_compare_by_identity() {
    let shared = Rc::new(Response::new(200));
    let a = Value::from(shared.clone());
    let b = Value::from(shared);
    let c = Value::object(Response::new(200));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn accessors() {
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Int(3).as_float(), None);
    assert_eq!(Value::Float(0.5).as_float(), Some(0.5));
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::from(vec![1]).as_list(), Some(&[Value::Int(1)][..]));
    assert_eq!(Value::object(Opaque).as_object().unwrap().class_name(), "Opaque");
    assert_eq!(Value::object(Opaque).type_name(), "Opaque");
    assert_eq!(Value::Null.type_name(), "null");
}

// =============================================================================
// Integer coercion
// =============================================================================

#[test]
fn to_int_scalars() {
    assert_eq!(Value::Null.to_int(), 0);
    assert_eq!(Value::Bool(true).to_int(), 1);
    assert_eq!(Value::Bool(false).to_int(), 0);
    assert_eq!(Value::Int(-9).to_int(), -9);
    assert_eq!(Value::Float(7.5).to_int(), 7);
    assert_eq!(Value::Float(-7.5).to_int(), -7);
}

#[test]
fn to_int_strings() {
    let got: Vec<i64> = ["3", "x", "7.5", " 12abc", "1e3", ""]
        .into_iter()
        .map(|s| Value::from(s).to_int())
        .collect();
    assert_eq!(got, vec![3, 0, 7, 12, 1000, 0]);
}

#[test]
fn to_int_compound() {
    assert_eq!(Value::List(vec![]).to_int(), 0);
    assert_eq!(Value::from(vec![0]).to_int(), 1);
    assert_eq!(Value::object(Opaque).to_int(), 1);
}

// =============================================================================
// String coercion
// =============================================================================

#[test]
fn to_text_scalars() {
    let texts: Vec<String> = [
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Int(-12),
        Value::Float(2.5),
        Value::Float(4.0),
        Value::from("as-is"),
        Value::from(vec![1, 2]),
    ]
    .iter()
    .map(|v| v.to_text().unwrap().into_owned())
    .collect();

    assert_eq!(
        texts,
        vec!["", "1", "", "-12", "2.5", "4", "as-is", "Array"]
    );
}

#[test]
fn to_text_objects() {
    let job = Value::object(Job {
        name: "backup",
        done: true,
    });
    assert_eq!(job.to_text().unwrap(), "backup");

    let body = Value::object(Response::new(200).with_body("<xml/>"));
    assert_eq!(body.to_text().unwrap(), "<xml/>");
}

#[test]
fn to_text_rejects_objects_without_string_form() {
    let err = Value::object(Opaque).to_text().unwrap_err();
    assert_eq!(
        err,
        ConversionError::NotStringable {
            class: "Opaque".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "object of class `Opaque` could not be converted to string"
    );
}

// =============================================================================
// Truthiness
// =============================================================================

#[test]
fn loose_falsy_values() {
    for v in [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::Float(-0.0),
        Value::from(""),
        Value::from("0"),
        Value::List(vec![]),
    ] {
        assert!(!v.is_truthy(), "{v:?} should be falsy");
    }
}

#[test]
fn truthy_values() {
    for v in [
        Value::Bool(true),
        Value::Int(-1),
        Value::Float(f64::NAN),
        Value::from("0.0"),
        Value::from(" "),
        Value::from("false"),
        Value::from(vec![Value::Null]),
        Value::object(Opaque),
    ] {
        assert!(v.is_truthy(), "{v:?} should be truthy");
    }
}

// =============================================================================
// Success capability
// =============================================================================

#[test]
fn status_capability() {
    assert_eq!(Value::object(Response::new(201)).status(), Some(true));
    assert_eq!(Value::object(Response::new(404)).status(), Some(false));
    assert_eq!(
        Value::object(Job {
            name: "sync",
            done: false
        })
        .status(),
        Some(false)
    );
    assert_eq!(Value::object(Opaque).status(), None);
    assert_eq!(Value::Bool(true).status(), None);
}

#[test]
fn response_headers_iterate_in_name_order() {
    let r = Response::new(200)
        .with_header("X-Request-Id", "abc")
        .with_header("Content-Length", "0");
    let headers: Vec<(&str, &str)> = r.headers().collect();
    assert_eq!(
        headers,
        vec![("content-length", "0"), ("x-request-id", "abc")]
    );
    assert_eq!(r.status(), 200);
    assert_eq!(r.body(), "");
}
