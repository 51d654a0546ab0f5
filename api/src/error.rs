use axum::{Json, http::StatusCode, response::IntoResponse};
use flightdeck_common::{params::ValidationError, views::ApiErrorResponse};
use flightdeck_db::storage::StoreError;
use thiserror::Error;

use crate::auth::AuthError;

const INTERNAL_MESSAGE: &str = "Something went wrong on our end. Please try again later.";
const NOT_FOUND_MESSAGE: &str = "Flight not found";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error(transparent)]
    InternalAnyhow(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Auth(ae) if ae.is_unauthorized() => StatusCode::UNAUTHORIZED,
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Storage(StoreError::InvalidId(_)) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalAnyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(err: ApiError) -> Self {
        let status = err.status_code();

        let code = match status {
            StatusCode::NOT_FOUND => "NotFound",
            StatusCode::BAD_REQUEST => "BadRequest",
            StatusCode::UNAUTHORIZED => "Unauthorized",
            _ => "InternalError",
        };

        let message = match &err {
            ApiError::NotFound | ApiError::Storage(StoreError::InvalidId(_)) => {
                NOT_FOUND_MESSAGE.into()
            }
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Auth(ae) if ae.is_unauthorized() => ae.to_string(),
            _ => INTERNAL_MESSAGE.into(),
        };

        // Auth failures stay generic even in debug builds.
        let details = match &err {
            ApiError::Auth(_) => None,
            #[cfg(debug_assertions)]
            _ => Some(err.to_string()),
            #[cfg(not(debug_assertions))]
            _ => None,
        };

        ApiErrorResponse {
            code: Some(code.into()),
            message,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!("Error returned by handler: {self}");
        } else {
            tracing::debug!(status = %status_code, "Request rejected: {self}");
        }

        (status_code, Json(ApiErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_are_unauthorized_with_fixed_messages() {
        let cases = [
            (AuthError::MissingToken, "Token missing"),
            (AuthError::InvalidToken, "Invalid token"),
            (AuthError::InvalidCredentials, "Invalid credentials"),
        ];

        for (auth_error, message) in cases {
            let err = ApiError::from(auth_error);
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

            let body = ApiErrorResponse::from(err);
            assert_eq!(body.message, message);
            assert_eq!(body.code.as_deref(), Some("Unauthorized"));
            assert!(body.details.is_none());
        }
    }

    #[test]
    fn test_invalid_id_is_not_found() {
        let err = ApiError::from(StoreError::InvalidId("abc".into()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiErrorResponse::from(err).message, "Flight not found");
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = ApiError::from(ValidationError::new("departure", "must be exactly 4 characters long"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiErrorResponse::from(err).message,
            "departure must be exactly 4 characters long"
        );
    }

    #[test]
    fn test_internal_errors_hide_cause_in_message() {
        let err = ApiError::from(anyhow::anyhow!("connection refused to 10.0.0.3"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = ApiErrorResponse::from(err);
        assert_eq!(body.message, INTERNAL_MESSAGE);
        assert!(!body.message.contains("10.0.0.3"));
    }
}
