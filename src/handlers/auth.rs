use axum::{extract::State, Json};
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{AuthCapability, Credentials, Session};
use crate::state::AppState;

/// Raw signup/signin body. Fields are optional so that missing input
/// surfaces as a field-level 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/signup - register a new account, returns a session token
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<Session> {
    let credentials = validate_credentials(body)?;
    let session = state.auth.signup(credentials).await?;

    Ok(ApiResponse::created(session))
}

/// POST /auth/signin - verify credentials, returns a session token
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResult<Session> {
    let credentials = validate_credentials(body)?;
    let session = state.auth.signin(credentials).await?;

    Ok(ApiResponse::success(session))
}

fn validate_credentials(body: CredentialsRequest) -> Result<Credentials, ApiError> {
    let mut field_errors = HashMap::new();

    let email = body.email.unwrap_or_default();
    if email.trim().is_empty() {
        field_errors.insert("email".to_string(), "This field is required".to_string());
    } else if !email.contains('@') {
        field_errors.insert("email".to_string(), "Must be a valid email address".to_string());
    }

    let password = body.password.unwrap_or_default();
    if password.is_empty() {
        field_errors.insert("password".to_string(), "This field is required".to_string());
    }

    if !field_errors.is_empty() {
        return Err(ApiError::validation_error(
            "Missing required fields",
            Some(field_errors),
        ));
    }

    Ok(Credentials { email, password })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_credentials() {
        let body = CredentialsRequest {
            email: Some("user@example.com".into()),
            password: Some("123".into()),
        };
        let credentials = validate_credentials(body).unwrap();
        assert_eq!(credentials.email, "user@example.com");
    }

    #[test]
    fn rejects_missing_email() {
        let body = CredentialsRequest {
            email: None,
            password: Some("123".into()),
        };
        let err = validate_credentials(body).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_json()["field_errors"]["email"], "This field is required");
    }

    #[test]
    fn rejects_missing_password() {
        let body = CredentialsRequest {
            email: Some("user@example.com".into()),
            password: None,
        };
        let err = validate_credentials(body).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_json()["field_errors"]["password"], "This field is required");
    }

    #[test]
    fn rejects_empty_body() {
        let err = validate_credentials(CredentialsRequest::default()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        let body = err.to_json();
        assert!(body["field_errors"]["email"].is_string());
        assert!(body["field_errors"]["password"].is_string());
    }

    #[test]
    fn rejects_malformed_email() {
        let body = CredentialsRequest {
            email: Some("not-an-email".into()),
            password: Some("123".into()),
        };
        let err = validate_credentials(body).unwrap_err();
        assert_eq!(err.to_json()["field_errors"]["email"], "Must be a valid email address");
    }
}
