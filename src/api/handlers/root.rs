use axum::http::StatusCode;

use crate::greeting;

/// GET /
///
/// Pipeline status banner. Answers with the fixed confirmation string so a
/// CI job hitting the deployed service can tell the rollout went through.
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, greeting::root())
}
