//! Root greeting handler.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

pub const GREETING_MESSAGE: &str = "Hello World";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Greeting {
    #[schema(value_type = String, example = "Hello World")]
    pub message: &'static str,
}

/// Greeting
///
/// Returns a fixed welcome message.
#[utoipa::path(
    get,
    path = "/",
    tag = "General",
    responses(
        (status = 200, description = "Welcome message", body = Greeting)
    )
)]
#[instrument(name = "home::index")]
pub async fn index() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING_MESSAGE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_payload() {
        let Json(greeting) = index().await;
        assert_eq!(greeting.message, "Hello World");
    }

    #[test]
    fn test_greeting_serialization() {
        let body = serde_json::to_string(&Greeting {
            message: GREETING_MESSAGE,
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"Hello World"}"#);
    }
}
