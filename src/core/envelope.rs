//! A typed, schema-free view over Messari response bodies.
//!
//! Every operation returns the decoded body as a [`serde_json::Value`]. Callers that
//! want to branch on success versus an API-level error can classify it with
//! [`Envelope`] instead of probing keys by hand.

use serde::Serialize;
use serde_json::{Map, Value};

/// An API-level error reported inside a response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiError {
    /// The `error_code` field, usually mirroring an HTTP status (e.g. `404`).
    pub code: i64,
    /// The `error_message` field, if any.
    pub message: Option<String>,
}

/// The top-level shape of a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// A success body: `{"data": ..., "status": {...}}`.
    Data {
        /// The `data` payload, object or array.
        data: Value,
        /// The accompanying `status` object, if the server sent one.
        status: Option<Value>,
    },
    /// An error body, either `{"error_code", "error_message"}` or the same fields under `status`.
    Error(ApiError),
    /// Anything else; returned untouched.
    Unrecognized(Value),
}

impl Envelope {
    /// Classifies a borrowed body without consuming it.
    pub fn classify(body: &Value) -> Self {
        Self::from(body.clone())
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    /// The `data` payload of a success body.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Data { data, .. } => Some(data),
            _ => None,
        }
    }

    /// The API error of an error body.
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Value> for Envelope {
    fn from(body: Value) -> Self {
        match body {
            Value::Object(mut obj) => {
                if let Some(data) = obj.remove("data") {
                    return Self::Data {
                        data,
                        status: obj.remove("status"),
                    };
                }
                let err = obj
                    .get("status")
                    .and_then(Value::as_object)
                    .and_then(api_error)
                    .or_else(|| api_error(&obj));
                match err {
                    Some(e) => Self::Error(e),
                    None => Self::Unrecognized(Value::Object(obj)),
                }
            }
            other => Self::Unrecognized(other),
        }
    }
}

fn api_error(node: &Map<String, Value>) -> Option<ApiError> {
    let code = node.get("error_code")?;
    // Some endpoints send the code as a string.
    let code = code
        .as_i64()
        .or_else(|| code.as_str().and_then(|s| s.trim().parse().ok()))?;
    Some(ApiError {
        code,
        message: node
            .get("error_message")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}
