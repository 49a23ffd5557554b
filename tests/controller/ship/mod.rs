//! Controller-level tests for the ship catalog endpoints.
//!
//! Handlers are invoked directly with constructed extractors against an
//! in-memory SQLite database; assertions cover both status codes and
//! decoded response bodies.

mod count_ships;
mod list_ships;
mod update_ship;

use armada::model::ship::{ShipPayload, ShipType};
use armada_test_utils::prelude::ship::midnight;
use axum::response::Response;
use serde::de::DeserializeOwned;

/// Epoch milliseconds for the start of the given calendar day.
pub fn millis(year: i32, month: u32, day: u32) -> i64 {
    midnight(year, month, day).and_utc().timestamp_millis()
}

/// Body payload for a valid transport ship, usage flag left absent.
pub fn atlas_payload() -> ShipPayload {
    ShipPayload {
        name: Some("Atlas".to_string()),
        planet: Some("Earth".to_string()),
        ship_type: Some(ShipType::Transport),
        prod_date: Some(millis(2900, 1, 1)),
        speed: Some(0.5),
        crew_size: Some(10),
        is_used: None,
    }
}

/// Decode a JSON response body.
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
