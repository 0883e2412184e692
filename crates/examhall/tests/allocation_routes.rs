//! HTTP-level scenarios for the site pages, the allocation form, and the JSON API.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use examhall::allocation::lookup::{COURSES, HALLS, TIME_SLOTS};
use examhall::allocation::{allocation_router, AllocationDesk, MockAllocationSource};

const VALID_FORM: &str = "academicSession=2024%2F2025&level=200+Level&department=Computer+Science&college=College+of+Basic+Science&matricNumber=240303010071";

fn router() -> axum::Router {
    let exam_date = NaiveDate::from_ymd_opt(2024, 12, 15).expect("valid date");
    let desk = AllocationDesk::new(
        Arc::new(MockAllocationSource::with_seed(exam_date, 2024)),
        Duration::from_millis(2000),
    );
    allocation_router(Arc::new(desk))
}

async fn read_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_str(&body).expect("json payload")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

fn post_form(body: &str) -> Request<Body> {
    Request::post("/allocation")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn landing_page_renders() {
    let response = router().oneshot(get("/")).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let html = read_body(response).await;
    assert!(html.contains("Why Use Our System?"));
    assert!(html.contains(r#"<a href="/" class="active" aria-current="page">Home</a>"#));
}

#[tokio::test]
async fn lookup_page_renders_blank_form() {
    let response = router().oneshot(get("/allocation")).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let html = read_body(response).await;
    assert!(html.contains("<title>Find Your Exam Hall - ExamHall Allocation System</title>"));
    assert!(html.contains(r#"<form method="post" action="/allocation""#));
    assert!(!html.contains(r#"class="field-error""#));
    assert!(!html.contains(r#"role="alert""#));
}

#[tokio::test]
async fn unknown_paths_render_not_found() {
    let response = router()
        .oneshot(get("/allocation/history"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = read_body(response).await;
    assert!(html.contains("<code>/allocation/history</code>"));
}

#[tokio::test(start_paused = true)]
async fn valid_form_post_shows_the_slip() {
    let response = router()
        .oneshot(post_form(VALID_FORM))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let html = read_body(response).await;
    assert!(html.contains("Hall Allocation Found"));
    assert!(html.contains("<dd>240303010071</dd>"));
    assert!(html.contains("<dd>Computer Science</dd>"));
    assert!(html.contains("<dd>December 15, 2024</dd>"));
    assert!(HALLS.iter().any(|hall| html.contains(&format!("<dd>{hall}</dd>"))));
    assert!(html.contains("New Search"));
    assert!(!html.contains(r#"<form method="post""#));
}

#[tokio::test(start_paused = true)]
async fn invalid_form_post_re_renders_with_every_error() {
    let response = router()
        .oneshot(post_form("academicSession=2024-2025&matricNumber=12345"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = read_body(response).await;
    assert!(html.contains("Use format: 2024/2025"));
    assert!(html.contains("Level is required"));
    assert!(html.contains("Department is required"));
    assert!(html.contains("College is required"));
    assert!(html.contains("Must be 12 digits"));
    assert!(html.contains(r#"value="12345""#));
    assert!(!html.contains("Hall Allocation Found"));
}

#[tokio::test(start_paused = true)]
async fn json_lookup_returns_result() {
    let payload = json!({
        "academicSession": "2024/2025",
        "level": "200 Level",
        "department": "Computer Science",
        "college": "College of Basic Science",
        "matricNumber": "240303010071",
    });

    let response = router()
        .oneshot(post_json("/api/v1/allocation/lookup", payload))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["matricNumber"], "240303010071");
    assert_eq!(body["department"], "Computer Science");
    assert_eq!(body["level"], "200 Level");
    assert!(HALLS.contains(&body["hall"].as_str().expect("hall")));
    assert!(TIME_SLOTS.contains(&body["time"].as_str().expect("time")));
    assert!(COURSES.contains(&body["course"].as_str().expect("course")));
}

#[tokio::test(start_paused = true)]
async fn json_lookup_rejects_invalid_fields() {
    let payload = json!({
        "academicSession": "2024/2025",
        "level": "200 Level",
        "department": "CS",
        "college": "College of Basic Science",
        "matricNumber": "24030301007x",
    });

    let response = router()
        .oneshot(post_json("/api/v1/allocation/lookup", payload))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json_body(response).await;
    assert_eq!(body["errors"]["department"], "Enter a valid department name");
    assert_eq!(body["errors"]["matricNumber"], "Must be 12 digits");
    assert!(body["errors"].get("level").is_none());
}

#[tokio::test]
async fn validate_endpoint_checks_a_single_field() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/allocation/validate",
            json!({ "field": "level", "value": "200level" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body, json!({ "field": "level", "valid": true }));

    let response = router()
        .oneshot(post_json(
            "/api/v1/allocation/validate",
            json!({ "field": "academicSession", "value": "" }),
        ))
        .await
        .expect("route executes");
    let body = read_json_body(response).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["error"], "Academic session is required");
}
