//! Tests for the count_ships endpoint.

use armada::{controller::ship::count_ships, model::app::AppState};
use armada_test_utils::prelude::*;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use armada_test_utils::fixtures::ship::MockShip;

use super::*;

/// Expect the unpaginated count of every record with no criteria
#[tokio::test]
async fn success_counts_all_records() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_ship_table();
    for index in 0..5 {
        builder = builder.with_ship(MockShip {
            name: format!("Vessel {}", index),
            ..MockShip::default()
        });
    }
    let test = builder.build().await?;
    let state: AppState = test.to_app_state();

    let result = count_ships(State(state), Query(Default::default())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let count: u64 = body_json(response).await;
    assert_eq!(count, 5);

    Ok(())
}

/// Expect the count to honor filter criteria
#[tokio::test]
async fn success_counts_matching_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_table()
        .with_ship(MockShip::default())
        .with_ship(MockShip {
            name: "Borealis".to_string(),
            crew_size: 2000,
            ..MockShip::default()
        })
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let filters = armada::model::ship::ShipFilters {
        min_crew_size: Some(100),
        ..Default::default()
    };
    let result = count_ships(State(state), Query(filters)).await;

    let count: u64 = body_json(result.unwrap().into_response()).await;
    assert_eq!(count, 1);

    Ok(())
}

/// Expect zero from an empty store
#[tokio::test]
async fn success_with_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;
    let state: AppState = test.to_app_state();

    let result = count_ships(State(state), Query(Default::default())).await;

    let count: u64 = body_json(result.unwrap().into_response()).await;
    assert_eq!(count, 0);

    Ok(())
}
