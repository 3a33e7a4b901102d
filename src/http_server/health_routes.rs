//! Health HTTP Routes
//!
//! Unauthenticated liveness probe used by the frontend and load balancers.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Name reported by `/health`
pub const SERVICE_NAME: &str = "PromoSuite AI Backend";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// ISO8601, UTC
    pub timestamp: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Health check route at the root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}
