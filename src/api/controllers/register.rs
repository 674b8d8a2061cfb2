//! Registration controller.
//!
//! Validation runs in a fixed order and stops at the first failure:
//! required fields, password confirmation, email format. Only then is the
//! user creation use case invoked. Collaborator failures are logged and
//! reported as a bare 500.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::helpers::{bad_request, internal_server_error, ok};
use crate::api::protocols::{Controller, HttpRequest, HttpResponse};
use crate::config::{FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRMATION, REQUIRED_FIELDS};
use crate::domain::AddUserModel;
use crate::services::AddUser;
use crate::utils::EmailValidator;

/// Fields of a request that passed the local checks
struct RegistrationParams<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

pub struct RegisterController {
    email_validator: Arc<dyn EmailValidator>,
    add_user: Arc<dyn AddUser>,
}

impl RegisterController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_user: Arc<dyn AddUser>) -> Self {
        Self {
            email_validator,
            add_user,
        }
    }
}

/// Presence and confirmation checks, no collaborator involved.
fn validate_request(req: &HttpRequest) -> Result<RegistrationParams<'_>, ApiError> {
    let mut values = [""; REQUIRED_FIELDS.len()];
    for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
        if req.is_missing(field) {
            return Err(ApiError::missing_param(field));
        }
        *slot = req
            .param(field)
            .ok_or_else(|| ApiError::invalid_param(field))?;
    }

    let [username, email, password, confirmation] = values;
    if password != confirmation {
        return Err(ApiError::match_param(FIELD_PASSWORD, FIELD_PASSWORD_CONFIRMATION));
    }

    Ok(RegistrationParams {
        username,
        email,
        password,
    })
}

#[async_trait]
impl Controller for RegisterController {
    async fn handle(&self, req: HttpRequest) -> HttpResponse {
        let params = match validate_request(&req) {
            Ok(params) => params,
            Err(err) => {
                tracing::debug!(error = %err, "Registration request rejected");
                return bad_request(err);
            }
        };

        match self.email_validator.is_valid(params.email) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("Registration request rejected: invalid email");
                return bad_request(ApiError::invalid_param(FIELD_EMAIL));
            }
            Err(e) => {
                tracing::error!("Email validation failed: {}", e);
                return internal_server_error();
            }
        }

        let new_user = AddUserModel {
            username: params.username.to_string(),
            email: params.email.to_string(),
            password: params.password.to_string(),
        };

        match self.add_user.add(new_user).await {
            Ok(user) => ok(user),
            Err(e) => {
                tracing::error!("User creation failed: {}", e);
                internal_server_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::protocols::ResponseBody;
    use crate::domain::UserRecord;
    use crate::errors::AppError;
    use crate::services::MockAddUser;
    use crate::utils::MockEmailValidator;
    use serde_json::{json, Value};

    fn fake_account() -> UserRecord {
        UserRecord::new(
            "valid_id".to_string(),
            "valid_name".to_string(),
            "valid_email@mail.com".to_string(),
            "valid_password".to_string(),
        )
    }

    fn accepting_validator() -> MockEmailValidator {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().returning(|_| Ok(true));
        validator
    }

    fn succeeding_add_user() -> MockAddUser {
        let mut add_user = MockAddUser::new();
        add_user.expect_add().returning(|_| Ok(fake_account()));
        add_user
    }

    fn make_sut(validator: MockEmailValidator, add_user: MockAddUser) -> RegisterController {
        RegisterController::new(Arc::new(validator), Arc::new(add_user))
    }

    fn request(body: Value) -> HttpRequest {
        HttpRequest::from_json(body)
    }

    fn valid_body() -> Value {
        json!({
            "username": "any_username",
            "email": "any_email@mail.com",
            "password1": "any_password",
            "password2": "any_password"
        })
    }

    fn without(field: &str) -> Value {
        let mut body = valid_body();
        if let Value::Object(map) = &mut body {
            map.remove(field);
        }
        body
    }

    #[tokio::test]
    async fn test_returns_400_if_no_username() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());
        let res = sut.handle(request(without("username"))).await;

        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("username")));
    }

    #[tokio::test]
    async fn test_returns_400_if_no_email() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());
        let res = sut.handle(request(without("email"))).await;

        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("email")));
    }

    #[tokio::test]
    async fn test_returns_400_if_no_password() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());
        let res = sut.handle(request(without("password1"))).await;

        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("password1")));
    }

    #[tokio::test]
    async fn test_returns_400_if_no_password_confirmation() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());
        let res = sut.handle(request(without("password2"))).await;

        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("password2")));
    }

    #[tokio::test]
    async fn test_reports_first_missing_field_in_order() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());

        let res = sut
            .handle(request(json!({ "password2": "any_password" })))
            .await;
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("username")));

        let res = sut
            .handle(request(json!({ "username": "any_username", "password1": "x" })))
            .await;
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("email")));
    }

    #[tokio::test]
    async fn test_empty_string_counts_as_missing() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());
        let mut body = valid_body();
        body["email"] = json!("");

        let res = sut.handle(request(body)).await;
        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("email")));
    }

    #[tokio::test]
    async fn test_present_non_string_field_is_invalid() {
        let mut add_user = MockAddUser::new();
        add_user.expect_add().never();
        let sut = make_sut(accepting_validator(), add_user);

        let mut body = valid_body();
        body["username"] = json!(42);
        let res = sut.handle(request(body)).await;
        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, ResponseBody::Error(ApiError::invalid_param("username")));

        let mut body = valid_body();
        body["password2"] = json!(true);
        let res = sut.handle(request(body)).await;
        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, ResponseBody::Error(ApiError::invalid_param("password2")));
    }

    #[tokio::test]
    async fn test_falsy_non_string_field_is_missing() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());

        let mut body = valid_body();
        body["email"] = json!(0);
        let res = sut.handle(request(body)).await;
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("email")));

        let mut body = valid_body();
        body["password1"] = json!(null);
        let res = sut.handle(request(body)).await;
        assert_eq!(res.body, ResponseBody::Error(ApiError::missing_param("password1")));
    }

    #[tokio::test]
    async fn test_returns_400_if_passwords_do_not_match() {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().never();
        let mut add_user = MockAddUser::new();
        add_user.expect_add().never();

        let sut = make_sut(validator, add_user);
        let res = sut
            .handle(request(json!({
                "username": "a",
                "email": "a@b.com",
                "password1": "x",
                "password2": "y"
            })))
            .await;

        assert_eq!(res.status_code, 400);
        assert_eq!(
            res.body,
            ResponseBody::Error(ApiError::match_param("password1", "password2"))
        );
    }

    #[tokio::test]
    async fn test_returns_400_if_email_is_invalid() {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().returning(|_| Ok(false));
        let mut add_user = MockAddUser::new();
        add_user.expect_add().never();

        let sut = make_sut(validator, add_user);
        let res = sut.handle(request(valid_body())).await;

        assert_eq!(res.status_code, 400);
        assert_eq!(res.body, ResponseBody::Error(ApiError::invalid_param("email")));
    }

    #[tokio::test]
    async fn test_calls_email_validator_with_correct_email() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .withf(|email| email == "any_email@mail.com")
            .times(1)
            .returning(|_| Ok(true));

        let sut = make_sut(validator, succeeding_add_user());
        sut.handle(request(valid_body())).await;
    }

    #[tokio::test]
    async fn test_returns_500_if_email_validator_fails() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .returning(|_| Err(AppError::validation("validator crashed")));
        let mut add_user = MockAddUser::new();
        add_user.expect_add().never();

        let sut = make_sut(validator, add_user);
        let res = sut.handle(request(valid_body())).await;

        assert_eq!(res.status_code, 500);
        assert_eq!(res.body, ResponseBody::Error(ApiError::InternalServer));
    }

    #[tokio::test]
    async fn test_calls_add_user_with_correct_values() {
        let mut add_user = MockAddUser::new();
        add_user
            .expect_add()
            .withf(|user| {
                user.username == "any_username"
                    && user.email == "any_email@mail.com"
                    && user.password == "any_password"
            })
            .times(1)
            .returning(|_| Ok(fake_account()));

        let sut = make_sut(accepting_validator(), add_user);
        sut.handle(request(valid_body())).await;
    }

    #[tokio::test]
    async fn test_returns_500_if_add_user_fails() {
        let mut add_user = MockAddUser::new();
        add_user
            .expect_add()
            .returning(|_| Err(AppError::encryption("hash failure")));

        let sut = make_sut(accepting_validator(), add_user);
        let res = sut.handle(request(valid_body())).await;

        assert_eq!(res.status_code, 500);
        assert_eq!(res.body, ResponseBody::Error(ApiError::InternalServer));
    }

    #[tokio::test]
    async fn test_returns_200_with_created_user() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());
        let res = sut.handle(request(valid_body())).await;

        assert_eq!(res.status_code, 200);
        assert_eq!(res.body, ResponseBody::User(fake_account()));
    }

    #[tokio::test]
    async fn test_identical_requests_yield_identical_responses() {
        let sut = make_sut(accepting_validator(), succeeding_add_user());

        let first = sut.handle(request(valid_body())).await;
        let second = sut.handle(request(valid_body())).await;

        assert_eq!(first.status_code, 200);
        assert_eq!(first, second);
    }
}
