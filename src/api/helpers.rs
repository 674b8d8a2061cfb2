//! Response envelope builders.

use super::errors::ApiError;
use super::protocols::{HttpResponse, ResponseBody};
use crate::config::{STATUS_BAD_REQUEST, STATUS_INTERNAL_SERVER_ERROR, STATUS_OK};
use crate::domain::UserRecord;

pub fn bad_request(err: ApiError) -> HttpResponse {
    HttpResponse {
        status_code: STATUS_BAD_REQUEST,
        body: ResponseBody::Error(err),
    }
}

pub fn internal_server_error() -> HttpResponse {
    HttpResponse {
        status_code: STATUS_INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(ApiError::InternalServer),
    }
}

pub fn ok(user: UserRecord) -> HttpResponse {
    HttpResponse {
        status_code: STATUS_OK,
        body: ResponseBody::User(user),
    }
}
