//! HTTP route handlers.
//!
//! Two fixed JSON endpoints, each with its own Cache-Control header, plus the
//! OpenAPI document and its Swagger UI page. The CORS
//! policy and the request ID middleware wrap the whole router, fallbacks
//! included, so every response carries them.

pub mod docs;
pub mod fallback;
pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{AppConfig, ConfigError, CACHE_CONTROL_HEALTH, CACHE_CONTROL_HOME};
use crate::cors::create_cors_layer;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes, cache headers and the CORS policy.
pub fn create_router(config: &AppConfig) -> Result<Router, ConfigError> {
    let cors = create_cors_layer(&config.cors)?;

    // Greeting - static payload, safe to cache briefly
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - never cached, probes must hit the process
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    // API docs - only change on redeploy
    let docs_routes = Router::new()
        .route(docs::OPENAPI_PATH, get(docs::openapi_json))
        .route("/docs", get(docs::swagger_ui))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ));

    Ok(Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(cors)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer)))
}
