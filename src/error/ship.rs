//! Ship catalog error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Catalog operation failures surfaced to API callers.
#[derive(Error, Debug)]
pub enum ShipError {
    /// Path id was zero or negative.
    #[error("Ship id must be a positive integer, got {0}")]
    InvalidId(i32),
    /// Create or update payload failed field validation.
    #[error("Ship payload failed validation")]
    InvalidShip,
    /// No record with the requested id.
    #[error("No ship found with id {0}")]
    NotFound(i32),
}

/// Maps catalog failures to the API contract: bad input is 400, an unknown
/// id is 404, both with a JSON error body.
impl IntoResponse for ShipError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidId(_) | Self::InvalidShip => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
