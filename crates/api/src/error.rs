//! Centralized HTTP error handling.
//!
//! Every handler returns [`ApiResult`]; any error raised below the router,
//! whatever its origin, is rendered here as `{ "error", "message" }` with the
//! status mapped from [`AppError`].

use axum::{
    BoxError, Json,
    extract::rejection::QueryRejection,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use polyglot_shared::AppError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by handlers; wraps [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl<E> From<E> for ApiError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if status.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
            "An error occurred".to_string()
        } else {
            warn!(error = %self.0, code = self.0.error_code(), "Request rejected");
            self.0.to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message
            })),
        )
            .into_response()
    }
}

/// Maps a query string rejection into the error envelope.
pub fn query_rejection(rejection: &QueryRejection) -> ApiError {
    ApiError(AppError::Validation(rejection.body_text()))
}

/// Maps failures raised by middleware (the request timeout) into the envelope.
pub async fn middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError(AppError::Timeout("Request exceeded the configured limit".into()))
    } else {
        ApiError(AppError::Internal(err.to_string()))
    }
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError(AppError::NotFound(format!("No route for {}", uri.path())))
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError(AppError::MethodNotAllowed(format!("{method} {}", uri.path())))
}
