//! Tests for the list_ships endpoint.

use armada::{
    controller::ship::list_ships,
    model::{
        app::AppState,
        ship::{ShipDto, ShipFilters, ShipListParams, ShipOrder, ShipType},
    },
};
use armada_test_utils::prelude::*;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use armada_test_utils::fixtures::ship::{midnight, MockShip};

use super::*;

async fn seeded() -> Result<armada_test_utils::TestContext, TestError> {
    TestBuilder::new()
        .with_ship_table()
        .with_ship(MockShip {
            name: "Aurora".to_string(),
            planet: "Mars".to_string(),
            speed: 0.2,
            rating: 0.13,
            ..MockShip::default()
        })
        .with_ship(MockShip {
            name: "Borealis".to_string(),
            speed: 0.6,
            rating: 0.4,
            ..MockShip::default()
        })
        .with_ship(MockShip {
            name: "Aurora Prime".to_string(),
            ship_type: ShipType::Military,
            speed: 0.8,
            is_used: true,
            rating: 0.27,
            ..MockShip::default()
        })
        .with_ship(MockShip {
            name: "Corvus".to_string(),
            planet: "Mars".to_string(),
            prod_date: midnight(3000, 6, 15),
            speed: 0.9,
            crew_size: 4000,
            rating: 3.6,
            ..MockShip::default()
        })
        .build()
        .await
}

async fn list(
    state: AppState,
    filters: ShipFilters,
    params: ShipListParams,
) -> (StatusCode, Vec<ShipDto>) {
    let result = list_ships(State(state), Query(filters), Query(params)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    let status = response.status();

    (status, body_json(response).await)
}

/// Expect the default page: three records, ordered by id
#[tokio::test]
async fn success_with_default_paging() -> Result<(), TestError> {
    let test = seeded().await?;
    let state: AppState = test.to_app_state();

    let (status, ships) = list(state, ShipFilters::default(), ShipListParams::default()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ships.len(), 3);
    let ids: Vec<i32> = ships.iter().map(|ship| ship.id).collect();
    assert_eq!(ids, [1, 2, 3]);

    Ok(())
}

/// Expect the second page to hold the remaining record
#[tokio::test]
async fn success_with_second_page() -> Result<(), TestError> {
    let test = seeded().await?;
    let state: AppState = test.to_app_state();

    let params = ShipListParams {
        page_number: 1,
        ..ShipListParams::default()
    };
    let (_, ships) = list(state, ShipFilters::default(), params).await;

    assert_eq!(ships.len(), 1);
    assert_eq!(ships[0].name, "Corvus");

    Ok(())
}

/// Expect every supplied criterion to constrain the result
#[tokio::test]
async fn success_with_conjunctive_criteria() -> Result<(), TestError> {
    let test = seeded().await?;
    let state: AppState = test.to_app_state();

    let filters = ShipFilters {
        planet: Some("Mars".to_string()),
        min_speed: Some(0.5),
        ..ShipFilters::default()
    };
    let (_, ships) = list(state, filters, ShipListParams::default()).await;

    // Aurora is on Mars but slow; Borealis is fast but not on Mars.
    assert_eq!(ships.len(), 1);
    assert_eq!(ships[0].name, "Corvus");

    Ok(())
}

/// Expect substring matching on name criteria
#[tokio::test]
async fn success_with_name_substring() -> Result<(), TestError> {
    let test = seeded().await?;
    let state: AppState = test.to_app_state();

    let filters = ShipFilters {
        name: Some("Aurora".to_string()),
        ..ShipFilters::default()
    };
    let (_, ships) = list(state, filters, ShipListParams::default()).await;

    assert_eq!(ships.len(), 2);

    Ok(())
}

/// Expect the selected order field to sort the page ascending
#[tokio::test]
async fn success_with_speed_ordering() -> Result<(), TestError> {
    let test = seeded().await?;
    let state: AppState = test.to_app_state();

    let params = ShipListParams {
        page_size: 10,
        order: ShipOrder::Speed,
        ..ShipListParams::default()
    };
    let (_, ships) = list(state, ShipFilters::default(), params).await;

    let speeds: Vec<f64> = ships.iter().map(|ship| ship.speed).collect();
    assert_eq!(speeds, [0.2, 0.6, 0.8, 0.9]);

    Ok(())
}

/// Expect an empty page from an empty store
#[tokio::test]
async fn success_with_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_table().build().await?;
    let state: AppState = test.to_app_state();

    let (status, ships) = list(state, ShipFilters::default(), ShipListParams::default()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(ships.is_empty());

    Ok(())
}
