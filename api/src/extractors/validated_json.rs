use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use flightdeck_common::params::Validate;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// JSON body extractor that also runs [`Validate`] on the parsed value.
///
/// Any failure, whether a missing content type, a syntax error, a type mismatch or
/// a field rule, is reported as 400 Bad Request.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(status = %rejection.status(), "JSON body rejected");
                ApiError::bad_request(describe_rejection(&rejection))
            })?;

        value.validate().inspect_err(|e| {
            debug!(field = e.field, "Request body failed validation");
        })?;

        Ok(Self(value))
    }
}

fn describe_rejection(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`".into()
        }
        JsonRejection::JsonSyntaxError(_) => "Invalid JSON".into(),
        JsonRejection::JsonDataError(_) => {
            "Invalid JSON: wrong or missing types for one or more fields".into()
        }
        _ => "Failed to read request body".into(),
    }
}
