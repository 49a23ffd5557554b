//! Tests for the update_ship endpoint.

use armada::{
    controller::ship::{create_ship, update_ship},
    model::{
        app::AppState,
        ship::{ShipDto, ShipPayload},
    },
};
use armada_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;

async fn created_atlas(state: &AppState) -> ShipDto {
    let result = create_ship(State(state.clone()), Json(atlas_payload())).await;
    body_json(result.unwrap().into_response()).await
}

/// Expect untouched fields preserved and the rating re-derived
#[tokio::test]
async fn success_merges_only_present_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;
    let state: AppState = test.to_app_state();
    let created = created_atlas(&state).await;

    let patch = ShipPayload {
        crew_size: Some(20),
        ..ShipPayload::default()
    };
    let result = update_ship(State(state), Path(created.id), Json(patch)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: ShipDto = body_json(response).await;
    assert_eq!(updated.crew_size, 20);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.planet, created.planet);
    assert_eq!(updated.prod_date, created.prod_date);
    // Speed, usage, and production date unchanged, so the rating stays 0.33.
    assert_eq!(updated.rating, 0.33);

    Ok(())
}

/// Expect a rating-input change to re-derive the stored rating
#[tokio::test]
async fn success_recomputes_rating() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;
    let state: AppState = test.to_app_state();
    let created = created_atlas(&state).await;

    let patch = ShipPayload {
        is_used: Some(true),
        ..ShipPayload::default()
    };
    let result = update_ship(State(state), Path(created.id), Json(patch)).await;

    let updated: ShipDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(updated.rating, 0.17);

    Ok(())
}

/// Expect an all-absent payload to succeed without modifying the record
#[tokio::test]
async fn success_with_empty_payload_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;
    let state: AppState = test.to_app_state();
    let created = created_atlas(&state).await;

    let result = update_ship(State(state), Path(created.id), Json(ShipPayload::default())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: ShipDto = body_json(response).await;
    assert_eq!(updated, created);

    Ok(())
}

/// Expect 400 when the id is zero or negative
#[tokio::test]
async fn bad_request_for_non_positive_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;
    let state: AppState = test.to_app_state();

    let result = update_ship(State(state), Path(-1), Json(ShipPayload::default())).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when a present field is out of range
#[tokio::test]
async fn bad_request_for_invalid_present_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;
    let state: AppState = test.to_app_state();
    let created = created_atlas(&state).await;

    let patch = ShipPayload {
        speed: Some(0.996),
        ..ShipPayload::default()
    };
    let result = update_ship(State(state), Path(created.id), Json(patch)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when the id has no record
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;
    let state: AppState = test.to_app_state();

    let patch = ShipPayload {
        crew_size: Some(20),
        ..ShipPayload::default()
    };
    let result = update_ship(State(state), Path(42), Json(patch)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
