//! Client-facing error objects.
//!
//! Every variant serializes to `{ "name": ..., "message": ... }`.

use serde::Serialize;
use thiserror::Error;

/// Errors returned in a response body
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ErrorBody")]
pub enum ApiError {
    #[error("Missing param: \"{0}\"")]
    MissingParam(String),

    #[error("Params does not match: \"{0}\", \"{1}\"")]
    MatchParam(String, String),

    #[error("Invalid param: \"{0}\"")]
    InvalidParam(String),

    #[error("Internal server error")]
    InternalServer,
}

/// Wire shape of an error
#[derive(Debug, Serialize)]
struct ErrorBody {
    name: &'static str,
    message: String,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        Self {
            name: err.name(),
            message: err.to_string(),
        }
    }
}

impl ApiError {
    /// Error class name exposed to clients
    pub fn name(&self) -> &'static str {
        match self {
            ApiError::MissingParam(_) => "MissingParamError",
            ApiError::MatchParam(_, _) => "MatchParamError",
            ApiError::InvalidParam(_) => "InvalidParamError",
            ApiError::InternalServer => "InternalServerError",
        }
    }
}

/// Convenience constructors
impl ApiError {
    pub fn missing_param(param: impl Into<String>) -> Self {
        ApiError::MissingParam(param.into())
    }

    pub fn match_param(param1: impl Into<String>, param2: impl Into<String>) -> Self {
        ApiError::MatchParam(param1.into(), param2.into())
    }

    pub fn invalid_param(param: impl Into<String>) -> Self {
        ApiError::InvalidParam(param.into())
    }
}
