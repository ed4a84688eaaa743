//! Health check endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ResponseShape;

    #[tokio::test]
    async fn test_health_matches_shape() {
        let Json(body) = health_check().await;
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["status"], "healthy");
        assert!(ResponseShape::Health.validate(&value).is_ok());
    }
}
