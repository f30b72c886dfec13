//! Request/response models shared by every [`super::HttpClient`] adapter.

use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verbs used by the portal endpoints.
pub enum HttpMethod {
    /// Read-only request.
    Get,
    /// State-changing request; always carries the CSRF header when a token is known.
    Post,
}

impl HttpMethod {
    /// Returns the wire token for the method.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Request body variants understood by the adapters.
pub enum HttpBody {
    /// No body.
    Empty,
    /// JSON document sent with `Content-Type: application/json`.
    Json(Value),
    /// `multipart/form-data` built from ordered text fields.
    Form(Vec<(String, String)>),
    /// `multipart/form-data` built from a live `<form>` element, file inputs included.
    ///
    /// Only the browser adapter can resolve the element; other adapters record the id.
    DomForm {
        /// DOM id of the form element.
        form_id: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// One outgoing request against the portal origin.
pub struct HttpRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Same-origin path, including the trailing slash the portal routes expect.
    pub path: String,
    /// Extra request headers, in insertion order.
    pub headers: Vec<(String, String)>,
    /// Body payload.
    pub body: HttpBody,
}

impl HttpRequest {
    /// Builds a bodiless `GET`.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            headers: Vec::new(),
            body: HttpBody::Empty,
        }
    }

    /// Builds a `POST` with the given body.
    pub fn post(path: impl Into<String>, body: HttpBody) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            headers: Vec::new(),
            body,
        }
    }

    /// Appends a header and returns the request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Looks up the first header with `name` (ASCII case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Completed response with the body already read as text.
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Builds a response from a status and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Builds a `200` response carrying `value` serialized as JSON.
    pub fn json(value: &Value) -> Self {
        Self::new(200, value.to_string())
    }

    /// Returns `true` for any 2xx status.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` message when the body does not match `T`.
    pub fn decode_json<T: DeserializeOwned>(&self) -> Result<T, String> {
        serde_json::from_str(&self.body).map_err(|e| e.to_string())
    }
}
