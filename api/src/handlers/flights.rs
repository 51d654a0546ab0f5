use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use flightdeck_common::{
    params::{CreateFlightParams, UpdateFlightParams},
    views::{ApiErrorResponse, Flight},
};
use flightdeck_db::{models::DbFlight, storage::FlightStore};
use tracing::{info, instrument};

use crate::{auth::Auth, context::ApiContext, error::ApiError, extractors::ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/v1/flights",
    tags = ["flights"],
    responses((status = 200, description = "List of flights", body = Vec<Flight>)),
    security(("bearerAuth" = []))
)]
pub async fn list_flights(
    State(ctx): State<ApiContext>,
    Auth(_caller): Auth,
) -> Result<Json<Vec<Flight>>, ApiError> {
    let flights = FlightStore::list(&*ctx.db).await?;
    Ok(Json(flights.into_iter().map(Flight::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/flights/{id}",
    tags = ["flights"],
    params(("id" = String, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "Flight not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_flight(
    State(ctx): State<ApiContext>,
    Auth(_caller): Auth,
    Path(id): Path<String>,
) -> Result<Json<Flight>, ApiError> {
    FlightStore::get(&*ctx.db, &id)
        .await?
        .map(|flight| Json(flight.into()))
        .ok_or_else(ApiError::not_found)
}

#[utoipa::path(
    post,
    path = "/api/v1/flights",
    tags = ["flights"],
    request_body = CreateFlightParams,
    responses(
        (status = 201, description = "Flight successfully created", body = Flight),
        (status = 400, description = "Validation failed", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = []))
)]
#[instrument(skip_all, fields(username = %caller.username))]
pub async fn create_flight(
    State(ctx): State<ApiContext>,
    Auth(caller): Auth,
    ValidatedJson(params): ValidatedJson<CreateFlightParams>,
) -> Result<(StatusCode, Json<Flight>), ApiError> {
    let flight = FlightStore::create(&*ctx.db, DbFlight::from(params)).await?;
    info!(id = %flight.external_id(), flight_number = %flight.flight_number, "Flight created");

    Ok((StatusCode::CREATED, Json(flight.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/flights/{id}",
    tags = ["flights"],
    params(("id" = String, Path, description = "Flight ID")),
    request_body = UpdateFlightParams,
    responses(
        (status = 200, description = "Flight updated", body = Flight),
        (status = 400, description = "Invalid payload", body = ApiErrorResponse),
        (status = 404, description = "Flight not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = []))
)]
#[instrument(skip_all, fields(username = %caller.username, %id))]
pub async fn update_flight(
    State(ctx): State<ApiContext>,
    Auth(caller): Auth,
    Path(id): Path<String>,
    ValidatedJson(params): ValidatedJson<UpdateFlightParams>,
) -> Result<Json<Flight>, ApiError> {
    let flight = FlightStore::update(&*ctx.db, &id, params.into())
        .await?
        .ok_or_else(ApiError::not_found)?;
    info!("Flight updated");

    Ok(Json(flight.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/flights/{id}",
    tags = ["flights"],
    params(("id" = String, Path, description = "Flight ID")),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 404, description = "Flight not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = []))
)]
#[instrument(skip_all, fields(username = %caller.username, %id))]
pub async fn delete_flight(
    State(ctx): State<ApiContext>,
    Auth(caller): Auth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !FlightStore::delete(&*ctx.db, &id).await? {
        return Err(ApiError::not_found());
    }
    info!("Flight deleted");

    Ok(StatusCode::NO_CONTENT)
}
