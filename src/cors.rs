//! Cross-origin policy layer.
//!
//! Builds a single `CorsLayer` from `CorsConfig`, applied to the whole router.
//! Origins are matched exactly against the allow-list. A `"*"` method or header
//! entry allows anything: with credentials enabled it is realised by mirroring
//! the preflight request, since browsers refuse a literal `*` on credentialed
//! responses.

use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::{ConfigError, CorsConfig, CORS_WILDCARD};

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|e| e == CORS_WILDCARD)
}

/// Create the CORS layer described by `config`.
///
/// Fails when an entry is not a valid header value, method or header name, or
/// when a wildcard origin is combined with credentials.
pub fn create_cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let credentials = config.allow_credentials;

    let allow_origin = if is_wildcard(&config.allow_origins) {
        if credentials {
            return Err(ConfigError::Validation(
                "cors.allow_origins cannot contain \"*\" when allow_credentials is true".to_string(),
            ));
        }
        AllowOrigin::any()
    } else {
        let origins = config
            .allow_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| {
                    ConfigError::Validation(format!("Invalid CORS origin: {:?}", origin))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    let allow_methods = match (is_wildcard(&config.allow_methods), credentials) {
        (true, true) => AllowMethods::mirror_request(),
        (true, false) => AllowMethods::any(),
        (false, _) => {
            let methods = config
                .allow_methods
                .iter()
                .map(|method| {
                    Method::from_bytes(method.as_bytes()).map_err(|_| {
                        ConfigError::Validation(format!("Invalid CORS method: {:?}", method))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowMethods::list(methods)
        }
    };

    let allow_headers = match (is_wildcard(&config.allow_headers), credentials) {
        (true, true) => AllowHeaders::mirror_request(),
        (true, false) => AllowHeaders::any(),
        (false, _) => {
            let headers = config
                .allow_headers
                .iter()
                .map(|header| {
                    HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
                        ConfigError::Validation(format!("Invalid CORS header: {:?}", header))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowHeaders::list(headers)
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(credentials)
        .allow_methods(allow_methods)
        .allow_headers(allow_headers))
}
