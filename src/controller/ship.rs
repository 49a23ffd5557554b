//! Ship catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        ship::{ShipDto, ShipFilters, ShipListParams, ShipPayload},
    },
    service::ship::ShipService,
};

/// OpenAPI tag for the ship catalog routes.
pub static SHIP_TAG: &str = "ship";

/// List one page of ships matching the filter criteria
#[utoipa::path(
    get,
    path = "/rest/ships",
    tag = SHIP_TAG,
    params(ShipFilters, ShipListParams),
    responses(
        (status = 200, description = "One page of matching ships", body = Vec<ShipDto>),
        (status = 400, description = "Unrecognized filter or order value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ships(
    State(state): State<AppState>,
    Query(filters): Query<ShipFilters>,
    Query(params): Query<ShipListParams>,
) -> Result<impl IntoResponse, Error> {
    let service = ShipService::new(&state.db, state.production_window);

    let ships = service.list(&filters, params).await?;

    Ok((StatusCode::OK, Json(ships)))
}

/// Count all ships matching the filter criteria
#[utoipa::path(
    get,
    path = "/rest/ships/count",
    tag = SHIP_TAG,
    params(ShipFilters),
    responses(
        (status = 200, description = "Number of matching ships", body = u64),
        (status = 400, description = "Unrecognized filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_ships(
    State(state): State<AppState>,
    Query(filters): Query<ShipFilters>,
) -> Result<impl IntoResponse, Error> {
    let service = ShipService::new(&state.db, state.production_window);

    let count = service.count(&filters).await?;

    Ok((StatusCode::OK, Json(count)))
}

/// Create a ship
#[utoipa::path(
    post,
    path = "/rest/ships",
    tag = SHIP_TAG,
    request_body = ShipPayload,
    responses(
        (status = 200, description = "Stored ship with its derived rating", body = ShipDto),
        (status = 400, description = "Missing or out-of-range fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ship(
    State(state): State<AppState>,
    Json(payload): Json<ShipPayload>,
) -> Result<impl IntoResponse, Error> {
    let service = ShipService::new(&state.db, state.production_window);

    let ship = service.create(payload).await?;

    Ok((StatusCode::OK, Json(ship)))
}

/// Get one ship by id
#[utoipa::path(
    get,
    path = "/rest/ships/{id}",
    tag = SHIP_TAG,
    responses(
        (status = 200, description = "The stored ship", body = ShipDto),
        (status = 400, description = "Id is zero or negative", body = ErrorDto),
        (status = 404, description = "No ship with this id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ship(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = ShipService::new(&state.db, state.production_window);

    let ship = service.get(id).await?;

    Ok((StatusCode::OK, Json(ship)))
}

/// Partially update a ship
#[utoipa::path(
    post,
    path = "/rest/ships/{id}",
    tag = SHIP_TAG,
    request_body = ShipPayload,
    responses(
        (status = 200, description = "Updated ship with a re-derived rating", body = ShipDto),
        (status = 400, description = "Invalid id or out-of-range fields", body = ErrorDto),
        (status = 404, description = "No ship with this id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ship(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ShipPayload>,
) -> Result<impl IntoResponse, Error> {
    let service = ShipService::new(&state.db, state.production_window);

    let ship = service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(ship)))
}

/// Delete a ship
#[utoipa::path(
    delete,
    path = "/rest/ships/{id}",
    tag = SHIP_TAG,
    responses(
        (status = 200, description = "Ship deleted"),
        (status = 400, description = "Id is zero or negative", body = ErrorDto),
        (status = 404, description = "No ship with this id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ship(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = ShipService::new(&state.db, state.production_window);

    service.delete(id).await?;

    Ok(StatusCode::OK)
}
