use std::future::{Future, ready};

use axum::{extract::FromRequestParts, http::request::Parts};
use flightdeck_common::identity::VerifiedIdentity;

use super::error::AuthError;
use crate::error::ApiError;

/// Extractor for the identity attached by the bearer gate.
///
/// Only usable on routes behind [`require_bearer`](super::gate::require_bearer);
/// anywhere else it rejects with 401 "Token missing".
///
/// # Examples
///
/// ```rust,ignore
/// use flightdeck_api::auth::Auth;
///
/// pub async fn delete_flight(
///     Auth(caller): Auth,  // ← identity verified by the gate
///     Path(id): Path<String>,
/// ) -> Result<StatusCode, ApiError> {
///     info!(username = %caller.username, %id, "Deleting flight");
///     // ... delete flight
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
pub struct Auth(pub VerifiedIdentity);

impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<VerifiedIdentity>().cloned();
        ready(
            identity
                .map(Auth)
                .ok_or(ApiError::Auth(AuthError::MissingToken)),
        )
    }
}
