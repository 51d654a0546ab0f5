use axum::{Json, extract::State, http::StatusCode};
use flightdeck_common::{
    params::AuthLoginParams,
    views::{ApiErrorResponse, AuthLoginResponse},
};

use crate::{context::ApiContext, error::ApiError, extractors::ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/v1/auth",
    tags = ["auth"],
    request_body(content = AuthLoginParams, content_type = "application/json"),
    responses(
        (status = 201, description = "Successful login", body = AuthLoginResponse),
        (status = 400, description = "Malformed login body", body = ApiErrorResponse),
        (status = 401, description = "Invalid credentials", body = ApiErrorResponse),
    )
)]
pub async fn auth_login(
    State(ctx): State<ApiContext>,
    ValidatedJson(body): ValidatedJson<AuthLoginParams>,
) -> Result<(StatusCode, Json<AuthLoginResponse>), ApiError> {
    let token = ctx.token_issuer.issue(&body)?;
    Ok((StatusCode::CREATED, Json(AuthLoginResponse { token })))
}
