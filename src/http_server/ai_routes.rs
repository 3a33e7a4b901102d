//! AI HTTP Routes
//!
//! Beautification, layout optimization and inpainting. All three require a
//! bearer token and collapse internal failures into one static 500 each.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use uuid::Uuid;

use super::auth::authenticate;
use super::errors::{ApiError, ApiResult};
use super::state::ServiceState;
use crate::imaging::{self, BeautifyRequest, BeautifyResponse, InpaintRequest, InpaintResponse};
use crate::layout::{self, LayoutOptimization, LayoutOptimizationRequest};
use crate::observability::ObservationScope;

/// AI routes with shared state
pub fn ai_routes(state: Arc<ServiceState>) -> Router {
    Router::new()
        .route("/beautify", post(beautify_handler))
        .route("/optimize-layout", post(optimize_layout_handler))
        .route("/inpaint", post(inpaint_handler))
        .with_state(state)
}

/// Authentication runs before the body is looked at, so a missing token is
/// a 401 even when the body is also bad.
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(request)| request).map_err(body_error)
}

/// Bodies over the configured limit are 413; everything else is a 422.
fn body_error(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

fn format_seconds(seconds: f64) -> String {
    format!("{:.2}", seconds)
}

/// Portrait beautification handler
async fn beautify_handler(
    State(state): State<Arc<ServiceState>>,
    headers: HeaderMap,
    payload: Result<Json<BeautifyRequest>, JsonRejection>,
) -> ApiResult<BeautifyResponse> {
    let user = authenticate(&headers, state.demo_credits)?;
    let request = parse_body(payload)?;

    let request_id = Uuid::new_v4().to_string();
    let scope = ObservationScope::with_fields(
        "BEAUTIFY",
        &[("request_id", request_id.as_str()), ("user_id", user.user_id.as_str())],
    );

    match imaging::beautify(request, state.beautify_delay).await {
        Ok(response) => {
            let seconds = format_seconds(response.processing_time);
            scope.complete_with_fields(&[("processing_time_s", seconds.as_str())]);
            Ok(Json(response))
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(ApiError::BeautifyFailed.into())
        }
    }
}

/// Layout optimization handler
async fn optimize_layout_handler(
    State(state): State<Arc<ServiceState>>,
    headers: HeaderMap,
    payload: Result<Json<LayoutOptimizationRequest>, JsonRejection>,
) -> ApiResult<LayoutOptimization> {
    let user = authenticate(&headers, state.demo_credits)?;
    let request = parse_body(payload)?;

    let request_id = Uuid::new_v4().to_string();
    let scope = ObservationScope::with_fields(
        "LAYOUT_OPTIMIZATION",
        &[
            ("layout_type", request.layout_type.as_str()),
            ("optimization_level", request.optimization_level.as_str()),
            ("request_id", request_id.as_str()),
            ("user_id", user.user_id.as_str()),
        ],
    );

    match layout::optimize(request.layout) {
        Ok(result) => {
            let changes = result.changes_made.len().to_string();
            scope.complete_with_fields(&[("changes", changes.as_str())]);
            Ok(Json(result))
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(ApiError::LayoutFailed.into())
        }
    }
}

/// Inpainting handler
async fn inpaint_handler(
    State(state): State<Arc<ServiceState>>,
    headers: HeaderMap,
    payload: Result<Json<InpaintRequest>, JsonRejection>,
) -> ApiResult<InpaintResponse> {
    let user = authenticate(&headers, state.demo_credits)?;
    let request = parse_body(payload)?;

    let request_id = Uuid::new_v4().to_string();
    let scope = ObservationScope::with_fields(
        "INPAINT",
        &[
            ("prompt", request.prompt.as_str()),
            ("request_id", request_id.as_str()),
            ("user_id", user.user_id.as_str()),
        ],
    );

    match imaging::inpaint(request, state.inpaint_delay).await {
        Ok(response) => {
            let seconds = format_seconds(response.processing_time);
            scope.complete_with_fields(&[("processing_time_s", seconds.as_str())]);
            Ok(Json(response))
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(ApiError::InpaintFailed.into())
        }
    }
}
