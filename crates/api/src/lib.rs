//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for currency conversion and language data
//! - Response shape validation
//! - The JSON error envelope

pub mod error;
pub mod routes;
pub mod schema;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, error_handling::HandleErrorLayer};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use polyglot_core::currency::{CurrencyFormatter, CurrencySettings};
use polyglot_core::i18n::I18nService;
use polyglot_shared::{AppConfig, AppError, AppResult};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion and language queries.
    pub i18n: Arc<I18nService>,
    /// Display formatting for converted amounts.
    pub formatter: Arc<CurrencyFormatter>,
    /// Upper bound on handling a single request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Builds the state from loaded configuration.
    ///
    /// Fails fast on configuration the service could never answer from:
    /// unknown currencies, non-positive rates or malformed language tags.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let i18n = I18nService::from_config(&config.i18n)
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        let formatter = CurrencyFormatter::new(CurrencySettings::from(&config.i18n));
        // Reject a bad default locale now rather than on the first request.
        formatter
            .format_currency(0_i64, None, None)
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        Ok(Self {
            i18n: Arc::new(i18n),
            formatter: Arc::new(formatter),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        })
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed);

    with_timeout(router, state.request_timeout)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bounds request handling; an overrun answers 408 in the error envelope.
fn with_timeout<S>(router: Router<S>, limit: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(error::middleware_error))
            .layer(TimeoutLayer::new(limit)),
    )
}
