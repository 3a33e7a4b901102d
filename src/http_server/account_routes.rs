//! Account HTTP Routes
//!
//! Credit balance and usage statistics. Both values are fixed until billing
//! and job tracking exist.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::HeaderMap,
    routing::get,
    Router,
};
use serde::Serialize;

use super::auth::authenticate;
use super::errors::ApiResult;
use super::state::ServiceState;

/// Account routes with shared state
pub fn account_routes(state: Arc<ServiceState>) -> Router {
    Router::new()
        .route("/credits", get(credits_handler))
        .route("/stats", get(stats_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct CreditsResponse {
    pub credits: u32,
    pub user_id: String,
}

/// Average seconds per job type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageProcessingTime {
    pub beautification: f64,
    pub layout_optimization: f64,
    pub inpainting: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageStats {
    pub total_beautifications: u64,
    pub total_layout_optimizations: u64,
    pub total_inpainting_operations: u64,
    pub uptime: String,
    pub avg_processing_time: AverageProcessingTime,
}

impl UsageStats {
    /// Figures shown on the dashboard
    pub fn published() -> Self {
        Self {
            total_beautifications: 1234,
            total_layout_optimizations: 567,
            total_inpainting_operations: 89,
            uptime: "99.9%".to_string(),
            avg_processing_time: AverageProcessingTime {
                beautification: 2.3,
                layout_optimization: 0.8,
                inpainting: 4.1,
            },
        }
    }
}

async fn credits_handler(
    State(state): State<Arc<ServiceState>>,
    headers: HeaderMap,
) -> ApiResult<CreditsResponse> {
    let user = authenticate(&headers, state.demo_credits)?;

    Ok(Json(CreditsResponse {
        credits: user.credits,
        user_id: user.user_id,
    }))
}

async fn stats_handler(
    State(state): State<Arc<ServiceState>>,
    headers: HeaderMap,
) -> ApiResult<UsageStats> {
    authenticate(&headers, state.demo_credits)?;
    Ok(Json(UsageStats::published()))
}
