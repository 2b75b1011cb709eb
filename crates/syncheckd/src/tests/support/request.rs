//! In-process request helpers driving the router with `oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::http::{API_KEY_HEADER, CHECK_ROUTE};

/// Response captured from the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResponse {
    /// Response status.
    pub status: StatusCode,
    /// `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Body decoded as UTF-8.
    pub body: String,
}

impl TestResponse {
    /// Parses the body as JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

/// Builds a `POST` to the check route with an optional key and raw body.
#[must_use]
pub fn check_request(key: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(CHECK_ROUTE);
    if let Some(key) = key {
        builder = builder.header(API_KEY_HEADER, key);
    }
    builder.body(body.into()).expect("request builds")
}

/// Sends `request` through `router` and buffers the response.
pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).expect("body is UTF-8"),
    }
}
