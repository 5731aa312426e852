//! Tests for the health endpoints (in-process, no socket)

use super::*;
use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use tower::ServiceExt;

const ROOT_BODY: &str = r#"{"status":"healthy","message":"Agentic API is running"}"#;
const HEALTH_BODY: &str = r#"{"status":"healthy"}"#;

/// Send one request through a fresh router, returning status, content type and body
async fn call(method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");

    let response = build_router()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    (
        status,
        content_type,
        String::from_utf8(body.to_vec()).expect("body is utf-8"),
    )
}

#[test]
fn test_root_response_serialization() {
    let json = serde_json::to_string(&HealthResponse::root()).expect("serializable");
    assert_eq!(json, ROOT_BODY);
}

#[test]
fn test_health_response_omits_message() {
    let json = serde_json::to_string(&HealthResponse::health()).expect("serializable");
    assert_eq!(json, HEALTH_BODY);
}

#[tokio::test]
async fn test_root_returns_200_with_message() {
    let (status, content_type, body) = call(Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, ROOT_BODY);
}

#[tokio::test]
async fn test_health_returns_200_with_status_only() {
    let (status, content_type, body) = call(Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, HEALTH_BODY);
}

#[tokio::test]
async fn test_responses_are_deterministic() {
    let first_root = call(Method::GET, "/").await;
    let first_health = call(Method::GET, "/health").await;

    for _ in 0..20 {
        assert_eq!(call(Method::GET, "/").await, first_root);
        assert_eq!(call(Method::GET, "/health").await, first_health);
    }
}

#[tokio::test]
async fn test_unknown_path_returns_404() {
    let (status, _, _) = call(Method::GET, "/ready").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_get_method_returns_405() {
    let (status, _, _) = call(Method::POST, "/health").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
