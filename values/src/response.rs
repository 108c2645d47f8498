use alloc::{
    collections::BTreeMap,
    string::String,
};

use crate::object::{Object, Status};

/// A completed service response.
///
/// Header names are stored lowercased, so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    status: u16,
    headers: BTreeMap<String, String>,
    body: String,
}

impl Response {
    /// Status codes treated as success by [`Status::is_ok`].
    pub const OK_CODES: [u16; 4] = [200, 201, 204, 206];

    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the status is one of `codes`.
    pub fn is_ok_with(&self, codes: &[u16]) -> bool {
        codes.contains(&self.status)
    }
}

impl Status for Response {
    fn is_ok(&self) -> bool {
        self.is_ok_with(&Self::OK_CODES)
    }
}

impl Object for Response {
    fn class_name(&self) -> &str {
        "Response"
    }

    fn to_text(&self) -> Option<String> {
        Some(self.body.clone())
    }

    fn as_status(&self) -> Option<&dyn Status> {
        Some(self)
    }
}
