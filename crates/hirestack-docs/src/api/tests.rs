//! In-process tests for the documentation router.
//!
//! Requests are driven through `tower::ServiceExt::oneshot()`; no socket is
//! bound and the viewer never runs, so nothing here touches the network.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hirestack_docs_source::{BundledSpec, SpecSource};

use crate::config::EMBEDDED_SPEC;
use crate::shell::ShellPage;
use crate::viewer::Viewer;

// ---------------------------------------------------------------------------
// Test harness
// ---------------------------------------------------------------------------

fn url_app() -> Router {
    let shell = ShellPage::new(Arc::new(SpecSource::default_url()), Viewer::Elements, None);
    crate::api::create_router(Arc::new(shell))
}

fn bundled_app() -> Router {
    let spec = BundledSpec::embedded(EMBEDDED_SPEC).unwrap();
    let shell = ShellPage::new(Arc::new(SpecSource::from(spec)), Viewer::Elements, None);
    crate::api::create_router(Arc::new(shell))
}

/// Send one request through the router and return status, content type and body.
async fn send(app: Router, req: Request<Body>) -> (StatusCode, String, bytes::Bytes) {
    let resp: Response = app.oneshot(req).await.expect("router returned error");
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    (status, content_type, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_body(body: &bytes::Bytes) -> Value {
    serde_json::from_slice(body).expect("response is not valid JSON")
}

fn text_body(body: &bytes::Bytes) -> String {
    String::from_utf8(body.to_vec()).expect("response is not UTF-8")
}

// ---------------------------------------------------------------------------
// Shell page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shell_page_mounts_one_viewer_with_url() {
    let (status, content_type, body) = send(url_app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));

    let html = text_body(&body);
    assert_eq!(html.matches("<elements-api").count(), 1);
    assert!(html.contains(r#"apiDescriptionUrl="https://api.hirestack.ai/openapi.json""#));
}

#[tokio::test]
async fn shell_page_mounts_one_viewer_with_bundled_document() {
    let (status, _, body) = send(bundled_app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let html = text_body(&body);
    assert_eq!(html.matches("<elements-api").count(), 1);
    assert!(html.contains("apiDescriptionDocument="));
    assert!(!html.contains("apiDescriptionUrl="));
    assert!(html.contains("<title>HireStack API</title>"));
}

#[tokio::test]
async fn shell_page_is_stable_across_requests() {
    let app = bundled_app();
    let (_, _, first) = send(app.clone(), get("/")).await;
    let (_, _, second) = send(app, get("/")).await;
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Bundled document
// ---------------------------------------------------------------------------

#[tokio::test]
async fn openapi_json_serves_bundled_document() {
    let (status, content_type, body) = send(bundled_app(), get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");

    let expected = BundledSpec::embedded(EMBEDDED_SPEC).unwrap();
    assert_eq!(json_body(&body), *expected.document());
}

#[tokio::test]
async fn openapi_json_is_404_for_url_source() {
    let (status, content_type, body) = send(url_app(), get("/openapi.json")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, "application/problem+json");

    let j = json_body(&body);
    assert_eq!(j["type"], "urn:hirestack-docs:error:not-found");
    assert_eq!(j["status"], 404);
    assert_eq!(j["instance"], "/openapi.json");
}

// ---------------------------------------------------------------------------
// Health and fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_source() {
    let (status, _, body) = send(url_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let j = json_body(&body);
    assert_eq!(j["status"], "healthy");
    assert_eq!(j["source"], "url");
    assert!(j["version"].is_string());

    let (_, _, body) = send(bundled_app(), get("/health")).await;
    assert_eq!(json_body(&body)["source"], "bundled");
}

#[tokio::test]
async fn unknown_route_returns_problem_details() {
    let (status, content_type, body) = send(url_app(), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, "application/problem+json");

    let j = json_body(&body);
    assert_eq!(j["title"], "Not Found");
    assert_eq!(j["instance"], "/nope");
}

#[tokio::test]
async fn cors_header_present() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();
    let resp = url_app().oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
