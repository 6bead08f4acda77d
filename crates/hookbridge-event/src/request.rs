//! Raw webhook request.

use std::collections::BTreeMap;

/// Raw webhook request, as received by the HTTP layer.
///
/// Header names are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookRequest {
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
}

impl WebhookRequest {
    /// Creates a request from its body.
    pub fn new<B: Into<Vec<u8>>>(body: B) -> Self {
        Self {
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Adds a header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Gets a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub(crate) fn into_body(self) -> Vec<u8> {
        self.body
    }
}
