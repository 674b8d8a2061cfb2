//! Register command - Feeds request bodies to the registration controller.

use std::fs;

use serde_json::{Map, Value};

use crate::api::{AppState, Controller, HttpRequest, HttpResponse};
use crate::cli::RegisterArgs;
use crate::config::{
    Config, FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRMATION, FIELD_USERNAME,
};
use crate::errors::{AppError, AppResult};

/// Execute the register command.
///
/// Prints each response envelope and returns them in request order.
pub async fn execute(args: RegisterArgs, config: Config) -> AppResult<Vec<HttpResponse>> {
    let state = AppState::from_config(&config)?;
    let requests = collect_requests(args)?;
    tracing::info!(count = requests.len(), "Processing registration requests");

    let mut responses = Vec::with_capacity(requests.len());
    for request in requests {
        let response = state.register_controller.handle(request).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        responses.push(response);
    }

    tracing::info!(stored_users = state.users.count().await?, "Done");
    Ok(responses)
}

/// Build requests from either the JSON file or the individual flags.
pub fn collect_requests(args: RegisterArgs) -> AppResult<Vec<HttpRequest>> {
    if let Some(path) = &args.file {
        let raw = fs::read_to_string(path)?;
        return parse_requests(&raw);
    }

    let mut body = Map::new();
    let fields = [
        (FIELD_USERNAME, args.username),
        (FIELD_EMAIL, args.email),
        (FIELD_PASSWORD, args.password1),
        (FIELD_PASSWORD_CONFIRMATION, args.password2),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            body.insert(field.to_string(), Value::String(value));
        }
    }

    Ok(vec![HttpRequest::new(body)])
}

/// Parse a JSON document holding one request body or an array of them.
pub fn parse_requests(raw: &str) -> AppResult<Vec<HttpRequest>> {
    match serde_json::from_str(raw)? {
        Value::Array(items) => Ok(items.into_iter().map(HttpRequest::from_json).collect()),
        body @ Value::Object(_) => Ok(vec![HttpRequest::from_json(body)]),
        _ => Err(AppError::validation(
            "Expected a JSON object or an array of objects",
        )),
    }
}
