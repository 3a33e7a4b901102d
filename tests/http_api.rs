//! HTTP API Tests
//!
//! Drives the full router in-process:
//! - /health needs no token and reports an ISO8601 timestamp
//! - every /api route answers 401 without a bearer token
//! - simulated jobs echo their input
//! - internal failures collapse into static 500 messages
//! - bodies up to the configured limit are accepted, larger ones get 413

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use promosuite::http_server::{HttpServer, HttpServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

const PORTRAIT: &str = "data:image/png;base64,iVBORw0KGgo=";
const MASK: &str = "data:image/png;base64,AAAA";

fn test_config() -> HttpServerConfig {
    HttpServerConfig {
        beautify_delay_ms: 0,
        inpaint_delay_ms: 0,
        ..Default::default()
    }
}

fn test_router() -> Router {
    HttpServer::with_config(test_config()).router()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    send_to(test_router(), req).await
}

async fn send_to(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_is_public() {
    let (status, body) = send(request(Method::GET, "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "PromoSuite AI Backend");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_protected_routes_require_token() {
    let routes = [
        (Method::POST, "/api/beautify", Some(json!({"image": PORTRAIT}))),
        (Method::POST, "/api/optimize-layout", Some(json!({"layout": {}}))),
        (Method::POST, "/api/inpaint", Some(json!({"image": PORTRAIT, "mask": MASK}))),
        (Method::GET, "/api/credits", None),
        (Method::GET, "/api/stats", None),
    ];

    for (method, uri, body) in routes {
        let (status, body) = send(request(method, uri, None, body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} should require a token", uri);
        assert_eq!(body["detail"], "Invalid authentication token");
        assert_eq!(body["code"], 401);
    }
}

#[tokio::test]
async fn test_auth_checked_before_body() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/beautify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();

    let (status, _) = send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blank_token_rejected() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/credits")
        .header(header::AUTHORIZATION, "Bearer   ")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_credits_for_demo_user() {
    let (status, body) = send(request(Method::GET, "/api/credits", Some("any-token"), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"credits": 100, "user_id": "demo_user"}));
}

#[tokio::test]
async fn test_stats_are_fixed() {
    let (status, body) = send(request(Method::GET, "/api/stats", Some("t"), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_beautifications"], 1234);
    assert_eq!(body["avg_processing_time"]["beautification"], 2.3);
}

// =============================================================================
// Beautify
// =============================================================================

#[tokio::test]
async fn test_beautify_echoes_image_with_flags() {
    let payload = json!({"image": PORTRAIT, "options": {"enhance_lips": true}});
    let (status, body) = send(request(Method::POST, "/api/beautify", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enhanced_image"], PORTRAIT);
    assert!(body["processing_time"].as_f64().unwrap() >= 0.0);
    assert_eq!(
        body["enhancements_applied"],
        json!({
            "face_enhancement": true,
            "skin_smoothing": true,
            "eye_brightening": true,
            "lip_enhancement": true
        })
    );
}

#[tokio::test]
async fn test_beautify_bad_image_is_static_500() {
    let payload = json!({"image": "data:image/png;base64,%%%"});
    let (status, body) = send(request(Method::POST, "/api/beautify", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Portrait beautification failed", "code": 500}));
}

#[tokio::test]
async fn test_beautify_missing_image_is_422() {
    let payload = json!({"options": {}});
    let (status, body) = send(request(Method::POST, "/api/beautify", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 422);
}

#[tokio::test]
async fn test_beautify_flag_words_coerce() {
    let payload = json!({"image": PORTRAIT, "options": {"enhance_face": "false", "enhance_lips": 1}});
    let (status, body) = send(request(Method::POST, "/api/beautify", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enhancements_applied"]["face_enhancement"], false);
    assert_eq!(body["enhancements_applied"]["lip_enhancement"], true);
}

#[tokio::test]
async fn test_beautify_unrecognized_flag_is_static_500() {
    let payload = json!({"image": PORTRAIT, "options": {"smooth_skin": "sometimes"}});
    let (status, body) = send(request(Method::POST, "/api/beautify", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Portrait beautification failed", "code": 500}));
}

// =============================================================================
// Body Limit
// =============================================================================

#[tokio::test]
async fn test_large_portrait_accepted() {
    // 4 MiB of base64 (3 MiB decoded), above axum's 2 MB default
    let image = format!("data:image/png;base64,{}", "A".repeat(4 * 1024 * 1024));
    let payload = json!({"image": image.clone()});
    let (status, body) = send(request(Method::POST, "/api/beautify", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enhanced_image"], image);
}

#[tokio::test]
async fn test_body_over_limit_is_413() {
    let config = HttpServerConfig {
        max_body_bytes: 1024,
        ..test_config()
    };
    let image = format!("data:image/png;base64,{}", "A".repeat(4096));
    let payload = json!({"image": image, "mask": MASK});

    let (status, body) = send_to(
        HttpServer::with_config(config).router(),
        request(Method::POST, "/api/inpaint", Some("t"), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body, json!({"detail": "Request body too large", "code": 413}));
}

#[tokio::test]
async fn test_body_limit_still_checks_auth_first() {
    let config = HttpServerConfig {
        max_body_bytes: 1024,
        ..test_config()
    };
    let payload = json!({"image": "A".repeat(4096)});

    let (status, _) = send_to(
        HttpServer::with_config(config).router(),
        request(Method::POST, "/api/beautify", None, Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Layout
// =============================================================================

#[tokio::test]
async fn test_optimize_layout_example() {
    let payload = json!({
        "layout": {
            "pages": [{
                "id": "p1",
                "children": [
                    {"type": "text", "text": "Grand Opening", "fontSize": 30, "y": 0},
                    {"type": "rect", "cornerRadius": 0}
                ]
            }]
        },
        "type": "flyer",
        "optimization_level": "standard"
    });

    let (status, body) =
        send(request(Method::POST, "/api/optimize-layout", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::OK);
    let children = &body["data"]["pages"][0]["children"];
    assert_eq!(children[0]["align"], "center");
    assert_eq!(children[1]["cornerRadius"], 5);
    assert_eq!(
        body["changes_made"],
        json!(["Centered title text: Grand Opening...", "Improved shape corner radius"])
    );
    assert!((body["optimization_score"].as_f64().unwrap() - 0.9).abs() < 1e-9);
}

#[tokio::test]
async fn test_optimize_layout_malformed_tree_is_static_500() {
    let payload = json!({"layout": {"pages": [{"children": [1, 2]}]}});
    let (status, body) =
        send(request(Method::POST, "/api/optimize-layout", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Layout optimization failed");
}

// =============================================================================
// Inpaint
// =============================================================================

#[tokio::test]
async fn test_inpaint_echoes_image() {
    let payload = json!({"image": PORTRAIT, "mask": MASK, "prompt": "remove the lamp post"});
    let (status, body) = send(request(Method::POST, "/api/inpaint", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inpainted_image"], PORTRAIT);
    assert!(body["processing_time"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_inpaint_bad_mask_is_static_500() {
    let payload = json!({"image": PORTRAIT, "mask": "data:image/png;base64,"});
    let (status, body) = send(request(Method::POST, "/api/inpaint", Some("t"), Some(payload))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Image inpainting failed");
}

// =============================================================================
// CORS
// =============================================================================

#[tokio::test]
async fn test_cors_allows_dev_frontend() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(req).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(req).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_cors_empty_origin_list_allows_any() {
    let config = HttpServerConfig {
        cors_origins: Vec::new(),
        ..test_config()
    };
    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = HttpServer::with_config(config).router().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
