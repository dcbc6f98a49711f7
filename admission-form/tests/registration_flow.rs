//! End-to-end registration flow through the public router

use admission_form::prelude::*;
use axum::body::{to_bytes, Body};
use http::{header, Request, StatusCode};
use tower::ServiceExt;

const VALID_BODY: &str = "name=Meera+Iyer&address=4+Hill+View%2C+Kochi&mobile=9123456780\
&email=meera%40example.org&gender=other&dob=2009-11-23&course=Humanities";

async fn send(request: Request<Body>) -> (StatusCode, String) {
    let app = router(AppState::new());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn htmx_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("HX-Request", "true")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_fill_submit_then_cancel() {
    let (status, body) = send(htmx_post("/register", VALID_BODY)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Data stored successfully!"));
    for value in [
        "Meera Iyer",
        "4 Hill View, Kochi",
        "9123456780",
        "meera@example.org",
        "other",
        "2009-11-23",
        "Humanities",
    ] {
        assert!(body.contains(&format!("<dd>{value}</dd>")), "missing {value}");
    }

    // The browser posts the same values to /cancel
    let (status, body) = send(htmx_post("/cancel", VALID_BODY)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Data stored successfully!"));
    assert!(!body.contains("Meera Iyer"));
    assert!(body.contains(r#"<input type="text" name="name""#));
}

#[tokio::test]
async fn test_empty_submit_reports_every_field() {
    let (status, body) = send(htmx_post("/register", "")).await;
    assert_eq!(status, StatusCode::OK);

    for message in [
        "Name is required",
        "Address is required",
        "Please enter a valid 10-digit mobile number",
        "Please enter a valid email address",
        "Gender is required",
        "Date of birth is required",
        "Please select a course",
    ] {
        assert!(body.contains(message), "missing {message}");
    }
    assert!(!body.contains("Data stored successfully!"));
}

#[tokio::test]
async fn test_unknown_gender_is_rejected() {
    let body = VALID_BODY.replace("gender=other", "gender=unknown");
    let (_, body) = send(htmx_post("/register", &body)).await;

    assert!(body.contains("Gender is required"));
    assert!(!body.contains("Data stored successfully!"));
}

#[tokio::test]
async fn test_plain_submit_gets_full_page() {
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(VALID_BODY))
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Data stored successfully!"));
}

#[tokio::test]
async fn test_liveness_json() {
    let request = Request::builder()
        .uri("/health/live")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
