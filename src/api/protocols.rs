//! Transport-agnostic request/response envelopes and the controller seam.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::ApiError;
use crate::domain::UserRecord;

/// Incoming request: an unvalidated key-value body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Map<String, Value>,
}

impl HttpRequest {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// Build a request from a JSON object payload.
    ///
    /// Non-object payloads produce an empty body.
    pub fn from_json(payload: Value) -> Self {
        match payload {
            Value::Object(body) => Self { body },
            _ => Self::default(),
        }
    }

    /// Whether a field is absent or holds a falsy value
    /// (`null`, `false`, `0` or an empty string).
    pub fn is_missing(&self, field: &str) -> bool {
        match self.body.get(field) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => true,
            Some(Value::String(value)) => value.is_empty(),
            Some(Value::Number(n)) => n.as_f64() == Some(0.0),
            Some(_) => false,
        }
    }

    /// Value of a field when it is a non-empty string.
    pub fn param(&self, field: &str) -> Option<&str> {
        self.body
            .get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Response payload: either an error object or the created user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Error(ApiError),
    /// Serialized as `{ id, username, email }`: the record's password hash
    /// is never written to the wire.
    User(UserRecord),
}

/// Outgoing response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Maps a request to a response. Implementations never fail.
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, req: HttpRequest) -> HttpResponse;
}
