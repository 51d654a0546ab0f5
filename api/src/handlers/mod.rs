use axum::{Json, extract::State};
use flightdeck_common::views::StatusResponse;

use crate::{context::ApiContext, error::ApiError};

pub mod auth;
pub mod flights;

#[utoipa::path(
    get,
    path = "/api/v1/status",
    tags = ["status"],
    responses((status = 200, description = "Service is up", body = StatusResponse))
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::online())
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    tags = ["status"],
    responses((status = 200, description = "Service and storage are reachable", body = String))
)]
pub async fn health_check(State(ctx): State<ApiContext>) -> Result<&'static str, ApiError> {
    ctx.db.ping().await?;
    Ok("Healthy")
}
