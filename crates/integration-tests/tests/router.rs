//! In-process router tests.
//!
//! These exercise the guard and validation paths against the real router
//! with stub collaborators. The pool is lazy and no database is required:
//! every request here must be decided before the store is touched.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use campus_integration_tests::{EchoExtractor, StubIdentity, test_state};
use campus_server::app;

fn test_app(identity: StubIdentity) -> Router {
    app(test_state(Arc::new(identity), Arc::new(EchoExtractor)))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app(StubIdentity::rejecting());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn user_listing_requires_identity() {
    let app = test_app(StubIdentity::rejecting());

    let response = app
        .oneshot(
            Request::get("/api/users")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_listing_rejects_unknown_token() {
    let app = test_app(StubIdentity::accepting("tok_good", "ext_1"));

    let response = app
        .oneshot(
            Request::get("/api/users")
                .header(header::AUTHORIZATION, "Bearer tok_other")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_shortlist_requires_identity() {
    let app = test_app(StubIdentity::rejecting());

    let response = app
        .oneshot(
            Request::get("/api/admins")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn directory_requires_identity() {
    let app = test_app(StubIdentity::rejecting());

    let response = app
        .oneshot(
            Request::get("/api/users/directory")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn role_mutation_rejected_before_any_store_access() {
    // The lazy pool would fail loudly if the handler reached the store; a
    // clean 401 proves the guard decided first.
    let app = test_app(StubIdentity::rejecting());

    let response = app
        .oneshot(
            Request::patch("/api/users/1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"role":"ADMIN"}"#))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn category_creation_rejects_empty_name_before_write() {
    let app = test_app(StubIdentity::rejecting());

    let response = app
        .oneshot(
            Request::post("/api/categories")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":""}"#))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_creation_rejects_missing_name() {
    let app = test_app(StubIdentity::rejecting());

    let response = app
        .oneshot(
            Request::post("/api/categories")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"icon":"Mic"}"#))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().expect("error message").contains("name"));
}

#[tokio::test]
async fn parse_document_requires_a_file_part() {
    let app = test_app(StubIdentity::rejecting());

    let boundary = "campus-test-boundary";
    let body = format!("--{boundary}--\r\n");

    let response = app
        .oneshot(
            Request::post("/api/documents/parse")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn parse_document_returns_extracted_text() {
    let app = test_app(StubIdentity::rejecting());

    let boundary = "campus-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\n\
         Content-Type: text/plain\r\n\
         \r\n\
         hello campus\r\n\
         --{boundary}--\r\n"
    );

    let response = app
        .oneshot(
            Request::post("/api/documents/parse")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["text"], "hello campus");
}

#[tokio::test]
async fn error_bodies_are_json_shaped() {
    let app = test_app(StubIdentity::rejecting());

    let response = app
        .oneshot(
            Request::get("/api/users")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}
