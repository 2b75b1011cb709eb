//! Per-request access logging.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use super::HTTP_TARGET;

/// Logs method, path, status and latency once the response is ready.
pub(crate) async fn record_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let latency_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    info!(
        target: HTTP_TARGET,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_us,
        "request completed"
    );
    response
}
