// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryFormRepo, InMemorySubmissionRepo, StaticIdentityVerifier};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use serde_json::Value;
use sforms_core::application::services::ApplicationServices;
use sforms_core::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub struct TestBackend {
    pub forms: Arc<InMemoryFormRepo>,
    pub submissions: Arc<InMemorySubmissionRepo>,
    pub services: Arc<ApplicationServices>,
}

pub fn build_backend(base_url: Option<&str>) -> TestBackend {
    let forms = Arc::new(InMemoryFormRepo::default());
    let submissions = Arc::new(InMemorySubmissionRepo::default());

    let services = Arc::new(ApplicationServices::new(
        forms.clone(),
        forms.clone(),
        forms.clone(),
        submissions.clone(),
        Arc::new(StaticIdentityVerifier::default()),
        Arc::new(FixedClock),
        base_url.map(str::to_owned),
    ));

    TestBackend {
        forms,
        submissions,
        services,
    }
}

pub fn make_test_router(backend: &TestBackend) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&backend.services),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

/// Send a request and return the status with the decoded JSON body (`Null` when empty).
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Assert that a body is an `ErrorResponse` with the expected `error` field.
pub fn assert_error_body(body: &Value, expected_error: &str) {
    let err_field = body.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {body}");
    assert!(!msg_field.is_empty(), "expected non-empty message in {body}");
}
