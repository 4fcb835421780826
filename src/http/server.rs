//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid server configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server.
///
/// Blocks until the server shuts down. A bind failure is returned as
/// `ServerError::Bind`.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = config.http.socket_addr()?;
    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    // Report the bound address once the listener is up
    let listening = handle.clone();
    tokio::spawn(async move {
        if let Some(bound) = listening.listening().await {
            tracing::info!("Listening on http://{}", bound);
        }
    });

    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpServerConfig;
    use crate::routes::create_router;

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        // Hold the port so the server cannot take it
        let held = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = held.local_addr().unwrap().port();

        let config = AppConfig {
            http: HttpServerConfig {
                host: "127.0.0.1".to_string(),
                port,
            },
            ..AppConfig::default()
        };
        let app = create_router(&config).unwrap();

        let err = start_server(app, &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_invalid_address_is_config_error() {
        let config = AppConfig {
            http: HttpServerConfig {
                host: "not a host".to_string(),
                port: 8000,
            },
            ..AppConfig::default()
        };

        let err = start_server(axum::Router::new(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
