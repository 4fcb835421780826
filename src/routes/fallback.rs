//! Handlers for requests no route accepts.

use axum::{
    http::{Method, Uri},
    Extension,
};

use crate::error::AppError;
use crate::middleware::RequestId;

/// Fallback for paths with no route.
pub async fn not_found(
    Extension(request_id): Extension<RequestId>,
    method: Method,
    uri: Uri,
) -> AppError {
    tracing::debug!(request_id = %request_id.0, %method, path = %uri.path(), "No route matched");
    AppError::NotFound
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed(
    Extension(request_id): Extension<RequestId>,
    method: Method,
    uri: Uri,
) -> AppError {
    tracing::debug!(request_id = %request_id.0, %method, path = %uri.path(), "Method not allowed");
    AppError::MethodNotAllowed
}
