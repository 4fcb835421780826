//! Configuration loading and constants.
//!
//! Every setting has a built-in default so the service runs without a config
//! file. A TOML file may override any subset of fields. `AppConfig` is the root
//! configuration struct; `AppConfig::validate` rejects settings that would
//! otherwise fail at bind time or produce a CORS policy browsers refuse.

use std::net::SocketAddr;
use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

use crate::cors::create_cors_layer;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Greeting payload never changes, so caches may keep it briefly
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

/// Liveness probes must always reach the process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Listen on all interfaces
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Local frontend dev server
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Matches any method or header in the CORS allow-lists
pub const CORS_WILDCARD: &str = "*";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "hello_api=debug";

/// Title of the OpenAPI document and the docs page
pub const API_TITLE: &str = "My API";

/// Swagger UI assets version loaded by the docs page
pub const SWAGGER_UI_VERSION: &str = "5.17.14";

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub http: HttpServerConfig,
    /// Cross-origin policy applied to every response
    pub cors: CorsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Resolve `host:port` into the address the listener binds.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Cross-origin resource sharing policy.
///
/// `"*"` in `allow_methods` or `allow_headers` allows anything. In
/// `allow_origins` it allows any origin, which is only accepted when
/// `allow_credentials` is false.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            allow_credentials: true,
            allow_methods: vec![CORS_WILDCARD.to_string()],
            allow_headers: vec![CORS_WILDCARD.to_string()],
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the listener address and CORS policy are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.socket_addr()?;
        let _cors = create_cors_layer(&self.cors)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_scaffold() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.cors.allow_origins, vec!["http://localhost:3000"]);
        assert!(config.cors.allow_credentials);
        assert_eq!(config.cors.allow_methods, vec!["*"]);
        assert_eq!(config.cors.allow_headers, vec!["*"]);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(!DEFAULT_LOG_FILTER.contains("tower_http"));
    }

    #[test]
    fn test_socket_addr_default() {
        let addr = HttpServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.cors.allow_origins, vec![DEFAULT_ALLOWED_ORIGIN]);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            port = 9000

            [cors]
            allow_origins = ["https://app.example.com", "http://localhost:5173"]
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.cors.allow_origins.len(), 2);
        // Untouched fields keep their defaults
        assert!(config.cors.allow_credentials);
        assert_eq!(config.cors.allow_methods, vec![CORS_WILDCARD]);
    }

    #[test]
    fn test_json_log_format() {
        let config = AppConfig::from_toml("[logging]\nformat = \"json\"").unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = AppConfig::from_toml("[http\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_host_rejected() {
        let err = AppConfig::from_toml("[http]\nhost = \"not a host\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_wildcard_origin_with_credentials_rejected() {
        let err = AppConfig::from_toml("[cors]\nallow_origins = [\"*\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_wildcard_origin_without_credentials_accepted() {
        let config = AppConfig::from_toml(
            "[cors]\nallow_origins = [\"*\"]\nallow_credentials = false",
        )
        .unwrap();
        assert!(!config.cors.allow_credentials);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nport = 8080").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
