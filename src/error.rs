// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError {
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::ValidationError { .. } => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::InternalServerError(_) => 500,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::ValidationError { message, field_errors } => {
                let mut response = json!({
                    "error": true,
                    "message": message,
                    "code": "VALIDATION_ERROR"
                });

                if let Some(field_errors) = field_errors {
                    response["field_errors"] = json!(field_errors);
                }

                response
            }
            _ => {
                json!({
                    "error": true,
                    "message": self.message(),
                    "code": self.error_code()
                })
            }
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(
        message: impl Into<String>,
        field_errors: Option<HashMap<String, String>>,
    ) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert service error types to ApiError
impl From<crate::services::auth_service::AuthError> for ApiError {
    fn from(err: crate::services::auth_service::AuthError) -> Self {
        use crate::services::auth_service::AuthError;
        match err {
            AuthError::InvalidCredentials => ApiError::unauthorized("Invalid credentials"),
            AuthError::EmailTaken => ApiError::conflict("Credentials taken"),
            AuthError::Token(msg) => {
                tracing::error!("Token issuance error: {}", msg);
                ApiError::internal_server_error("Failed to issue session token")
            }
            AuthError::Database(e) => sqlx_to_api_error(e),
        }
    }
}

impl From<crate::services::user_service::UserError> for ApiError {
    fn from(err: crate::services::user_service::UserError) -> Self {
        use crate::services::user_service::UserError;
        match err {
            UserError::NotFound => ApiError::not_found("User not found"),
            UserError::EmailTaken => ApiError::conflict("Credentials taken"),
            UserError::Database(e) => sqlx_to_api_error(e),
        }
    }
}

impl From<crate::services::bookmark_service::BookmarkError> for ApiError {
    fn from(err: crate::services::bookmark_service::BookmarkError) -> Self {
        use crate::services::bookmark_service::BookmarkError;
        match err {
            // Absent record and foreign record are deliberately indistinguishable
            BookmarkError::AccessDenied => ApiError::forbidden("Access to resource denied."),
            BookmarkError::Database(e) => sqlx_to_api_error(e),
        }
    }
}

// Log the real error but return a generic message; SQL details never reach clients
fn sqlx_to_api_error(err: sqlx::Error) -> ApiError {
    match err {
        sqlx::Error::RowNotFound => ApiError::not_found("Record not found"),
        sqlx::Error::PoolTimedOut => {
            tracing::error!("Database pool timeout");
            ApiError::service_unavailable("Database temporarily unavailable")
        }
        other => {
            tracing::error!("SQLx error: {}", other);
            ApiError::internal_server_error("An error occurred while processing your request")
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(ApiError::bad_request("x").status_code(), 400);
        assert_eq!(ApiError::unauthorized("x").status_code(), 401);
        assert_eq!(ApiError::forbidden("x").status_code(), 403);
        assert_eq!(ApiError::not_found("x").status_code(), 404);
        assert_eq!(ApiError::conflict("x").status_code(), 409);
        assert_eq!(ApiError::service_unavailable("x").status_code(), 503);
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "This field is required".to_string());
        let err = ApiError::validation_error("Missing required fields", Some(fields));

        assert_eq!(err.status_code(), 400);
        let body = err.to_json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["field_errors"]["email"], "This field is required");
    }

    #[test]
    fn forbidden_uses_access_denied_wire_message() {
        let err: ApiError = crate::services::bookmark_service::BookmarkError::AccessDenied.into();
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.message(), "Access to resource denied.");
    }
}
