//! HTTP controller endpoints for the armada web API.
//!
//! Axum handlers for the ship catalog. Controllers parse HTTP inputs, call
//! the service layer, and map outcomes into responses; they are documented
//! with utoipa for OpenAPI generation.

pub mod ship;
