//! OpenAPI document for the service.

use utoipa::OpenApi;

use crate::routes::health::HealthStatus;
use crate::routes::home::Greeting;

/// OpenAPI document served at `/openapi.json`.
///
/// The version is taken from `Cargo.toml`.
#[derive(OpenApi)]
#[openapi(
    info(title = "My API"),
    paths(crate::routes::home::index, crate::routes::health::health),
    components(schemas(Greeting, HealthStatus)),
    tags((name = "General", description = "General endpoints"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::API_TITLE;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, API_TITLE);
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));

        let schemas = doc.components.unwrap().schemas;
        assert!(schemas.contains_key("Greeting"));
        assert!(schemas.contains_key("HealthStatus"));
    }
}
