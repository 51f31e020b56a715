//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations,
//! collected into one OpenAPI document, and served alongside Swagger UI at
//! `/api/docs`.

use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and the
/// interactive documentation at `/api/docs`. CORS is left permissive since
/// the frontend lives on another origin and every mutating route requires a
/// bearer token.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Watchdeck", description = "Watchdeck API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::stock::STOCK_TAG, description = "Stock search and detail routes"),
        (name = controller::earnings::EARNINGS_TAG, description = "Earnings calendar routes"),
        (name = controller::watchlist::WATCHLIST_TAG, description = "Watchlist API routes"),
        (name = controller::market::MARKET_TAG, description = "Market data pass-through routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::google))
        .routes(routes!(controller::auth::google_callback))
        .routes(routes!(controller::auth::profile))
        .routes(routes!(controller::auth::verify))
        .routes(routes!(controller::stock::search))
        .routes(routes!(controller::stock::get_stock))
        .routes(routes!(controller::earnings::calendar))
        .routes(routes!(
            controller::watchlist::list,
            controller::watchlist::create
        ))
        .routes(routes!(
            controller::watchlist::get_one,
            controller::watchlist::update,
            controller::watchlist::delete
        ))
        .routes(routes!(
            controller::watchlist::get_stocks,
            controller::watchlist::add_stock
        ))
        .routes(routes!(controller::watchlist::remove_stock))
        .routes(routes!(controller::market::chart))
        .routes(routes!(controller::market::indices))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes.layer(CorsLayer::permissive())
}
