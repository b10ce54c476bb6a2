use axum::http::StatusCode;

use crate::greeting;

/// GET /health
///
/// Simple health check endpoint for monitoring service status.
/// Returns the fixed liveness string as plain text.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, greeting::health())
}
