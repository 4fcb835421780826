//! hello-api: a minimal JSON HTTP service.
//!
//! Serves a greeting at `/` and a liveness probe at `/health`, behind a
//! configurable cross-origin policy. The OpenAPI document is served at
//! `/openapi.json` and rendered at `/docs`.

pub mod config;
pub mod cors;
pub mod error;
pub mod http;
pub mod middleware;
pub mod openapi;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use routes::create_router;
