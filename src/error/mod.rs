//! Error types for the armada server.
//!
//! A top-level [`Error`] aggregates the domain-specific error types and
//! external library errors; `thiserror`'s `#[from]` keeps `?` ergonomic in
//! handlers and services. Every variant maps to the HTTP response the API
//! contract promises via `IntoResponse`.

pub mod config;
pub mod ship;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, ship::ShipError},
    model::api::ErrorDto,
};

/// Main error type for the armada server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Ship catalog error (invalid id, failed validation, unknown record).
    #[error(transparent)]
    ShipError(#[from] ShipError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own status mapping; everything else is treated
/// as an internal server error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ShipError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging, but returns a generic message
/// to the client so internal details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
