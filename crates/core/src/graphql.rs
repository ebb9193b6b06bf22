//! Wire-level GraphQL response and error model.
//!
//! The backend responds with the standard GraphQL envelope: an optional
//! `data` payload plus a list of errors carrying free-form `extensions`.
//! The two extension keys this SDK interprets are `errorType` (the
//! backend's error vocabulary) and `httpStatus` (set when the HTTP
//! layer rejected the call outright).

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Extension key carrying the backend's error vocabulary entry.
pub const EXTENSION_ERROR_TYPE: &str = "errorType";
/// Extension key carrying the HTTP status of a rejected call.
pub const EXTENSION_HTTP_STATUS: &str = "httpStatus";

/// One entry of a GraphQL response's error list.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    /// Human-readable error message.
    pub message: String,
    /// Free-form extension map attached by the backend.
    #[serde(default)]
    pub extensions: Map<String, Value>,
}

impl GraphQlError {
    /// Construct an error with just a message (no extensions).
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), extensions: Map::new() }
    }

    /// Attach an `errorType` extension.
    #[must_use]
    pub fn with_error_type(mut self, error_type: &str) -> Self {
        self.extensions
            .insert(EXTENSION_ERROR_TYPE.to_string(), Value::String(error_type.to_string()));
        self
    }

    /// Attach an `httpStatus` extension.
    #[must_use]
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.extensions.insert(EXTENSION_HTTP_STATUS.to_string(), Value::from(status));
        self
    }

    /// The backend's `errorType` vocabulary entry, when present.
    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        self.extensions.get(EXTENSION_ERROR_TYPE).and_then(Value::as_str)
    }

    /// The HTTP status recorded for this error, when present.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        self.extensions
            .get(EXTENSION_HTTP_STATUS)
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok())
    }
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_type() {
            Some(error_type) => write!(f, "{} ({})", self.message, error_type),
            None => write!(f, "{}", self.message),
        }
    }
}

/// The standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GraphQlResponse {
    /// Operation payload; absent on total failure.
    pub data: Option<Value>,
    /// Errors reported by the backend; empty on success.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// True if the envelope carries neither data nor errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.errors.is_empty()
    }
}
