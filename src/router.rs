//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! which are collected into a unified OpenAPI document. Swagger UI serves
//! interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Build the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /rest/ships` - List one page of matching ships
/// - `POST /rest/ships` - Create a ship
/// - `GET /rest/ships/count` - Count all matching ships
/// - `GET /rest/ships/{id}` - Get a ship by id
/// - `POST /rest/ships/{id}` - Partially update a ship
/// - `DELETE /rest/ships/{id}` - Delete a ship
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Armada", description = "Armada ship catalog API"), tags(
        (name = controller::ship::SHIP_TAG, description = "Ship catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::ship::list_ships,
            controller::ship::create_ship
        ))
        .routes(routes!(controller::ship::count_ships))
        .routes(routes!(
            controller::ship::get_ship,
            controller::ship::update_ship,
            controller::ship::delete_ship
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
