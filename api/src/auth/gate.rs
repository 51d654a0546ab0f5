//! Bearer-token gate for protected routes.
//!
//! The gate runs as a middleware stage in front of every protected handler:
//!
//! 1. Read the `Authorization` header.
//! 2. Require the literal `Bearer ` prefix, otherwise reject with
//!    "Token missing".
//! 3. Hand the token that follows to [`TokenVerifier`](super::TokenVerifier).
//! 4. On success, insert the [`VerifiedIdentity`] into the request extensions
//!    and run the rest of the pipeline; otherwise reject with "Invalid token".
//!
//! A rejected request never reaches its handler.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use flightdeck_common::identity::VerifiedIdentity;
use tracing::debug;

use super::error::AuthError;
use crate::{context::ApiContext, error::ApiError};

/// Scheme prefix of the `Authorization` header, matched case-sensitively.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Pull the bearer token out of the request headers.
///
/// Everything after the prefix up to the next space is the token. A header
/// with the prefix but an undecodable token fails as an invalid token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let rest = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .as_bytes()
        .strip_prefix(BEARER_PREFIX.as_bytes())
        .ok_or(AuthError::MissingToken)?;

    let token = rest.split(|&b| b == b' ').next().unwrap_or_default();
    std::str::from_utf8(token).map_err(|_| AuthError::InvalidToken)
}

/// Middleware that only lets requests carrying a valid bearer token through.
pub async fn require_bearer(
    State(ctx): State<ApiContext>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity: VerifiedIdentity = {
        let token = extract_bearer_token(req.headers()).inspect_err(|_| {
            debug!(path = req.uri().path(), "Rejected request without bearer token");
        })?;
        ctx.token_verifier.verify(token)?
    };

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
