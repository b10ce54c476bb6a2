//! HTTP API module for Pipeline Probe
//!
//! Provides the two plain-text endpoints of the service.
//!
//! # Endpoints
//! - `GET /` — pipeline status banner
//! - `GET /health` — health check

pub mod handlers;

use axum::{Router, routing::get};

/// Creates the main Axum router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
}
