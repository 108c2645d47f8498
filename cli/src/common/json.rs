//! Conversion between JSON documents and sequences.

use respseq::TypedSequence;
use respseq::values::{Object, Response, Value};
use serde_json::{Map, Value as Json};

use super::{CliError, CliResult};

/// A JSON object that is not a response.
///
/// It has no string form and no success query.
#[derive(Debug)]
pub struct Record(pub Map<String, Json>);

impl Object for Record {
    fn class_name(&self) -> &str {
        "Record"
    }
}

/// Parse `content` as a sequence.
///
/// An array becomes a sequence indexed from zero. An object becomes a
/// sequence in key order of appearance, each key being an element index.
pub fn parse_sequence(content: &str, name: &str) -> CliResult<TypedSequence> {
    let json: Json = serde_json::from_str(content).map_err(|source| CliError::Json {
        name: name.to_string(),
        source,
    })?;

    match json {
        Json::Array(items) => Ok(TypedSequence::from_values(items.into_iter().map(json_to_value))),
        Json::Object(map) => {
            let entries = map
                .into_iter()
                .map(|(key, item)| match key.parse::<usize>() {
                    Ok(index) => Ok((index, json_to_value(item))),
                    Err(_) => Err(CliError::InvalidIndex {
                        name: name.to_string(),
                        key,
                    }),
                })
                .collect::<CliResult<Vec<_>>>()?;
            Ok(TypedSequence::from_indexed(entries))
        }
        other => Err(CliError::NotASequence {
            name: name.to_string(),
            found: kind(&other),
        }),
    }
}

fn kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Convert one JSON element.
///
/// Objects with a `status` that fits an HTTP status code become
/// [`Response`]s, taking `headers` and `body` when present; other objects
/// become [`Record`]s.
pub fn json_to_value(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map_or(Value::Null, Value::Float),
        },
        Json::String(s) => Value::Str(s),
        Json::Array(items) => Value::List(items.into_iter().map(json_to_value).collect()),
        Json::Object(map) => match status_code(&map) {
            Some(status) => Value::object(response_from(status, map)),
            None => Value::object(Record(map)),
        },
    }
}

fn status_code(map: &Map<String, Json>) -> Option<u16> {
    map.get("status")?
        .as_u64()
        .and_then(|status| u16::try_from(status).ok())
}

fn response_from(status: u16, mut map: Map<String, Json>) -> Response {
    let mut response = Response::new(status);
    if let Some(Json::Object(headers)) = map.remove("headers") {
        for (name, value) in headers {
            response = response.with_header(&name, text_of(value));
        }
    }
    if let Some(body) = map.remove("body") {
        response = response.with_body(text_of(body));
    }
    response
}

/// Strings as-is, anything else as its JSON text.
fn text_of(json: Json) -> String {
    match json {
        Json::String(s) => s,
        other => other.to_string(),
    }
}

/// Convert one element for output.
///
/// Objects render as `{"class": ..., "ok": ...}`, with `ok` present only for
/// objects that expose a success query.
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
        Value::Str(s) => Json::String(s.clone()),
        Value::List(items) => Json::Array(items.iter().map(value_to_json).collect()),
        Value::Object(object) => {
            let mut map = Map::new();
            map.insert("class".into(), Json::from(object.class_name()));
            if let Some(status) = object.as_status() {
                map.insert("ok".into(), Json::Bool(status.is_ok()));
            }
            Json::Object(map)
        }
    }
}

/// Convert a sequence for output.
///
/// Contiguous sequences print as arrays; sparse ones as objects keyed by
/// index so the indices survive.
pub fn sequence_to_json(seq: &TypedSequence) -> Json {
    if seq.is_contiguous() {
        Json::Array(seq.values().map(value_to_json).collect())
    } else {
        Json::Object(
            seq.iter()
                .map(|(index, value)| (index.to_string(), value_to_json(value)))
                .collect(),
        )
    }
}
