//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it only proves the process can answer HTTP. Used by
//! Kubernetes, ECS, systemd and load balancers.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(value_type = String, example = "healthy")]
    pub status: &'static str,
}

/// Health check
///
/// Liveness probe. Answers whenever the process can serve HTTP.
#[utoipa::path(
    get,
    path = "/health",
    tag = "General",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    )
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: HEALTHY })
}
