//! Shared-secret request gate.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::{AppState, HTTP_TARGET};

/// Header carrying the client credential.
pub const API_KEY_HEADER: &str = "x-api-key";

const UNAUTHORIZED_BODY: &str = "Unauthorized";

/// Why a request was turned away. Logged, never returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Unconfigured,
    Missing,
    Mismatch,
}

impl Rejection {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Unconfigured => "unconfigured",
            Self::Missing => "missing",
            Self::Mismatch => "mismatch",
        }
    }
}

/// Lets the request through only when `X-Api-Key` matches the configured
/// credential.
pub(crate) async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.as_bytes());

    match check(state.config().api_key(), presented) {
        Ok(()) => next.run(request).await,
        Err(rejection) => {
            warn!(
                target: HTTP_TARGET,
                path = %request.uri().path(),
                reason = rejection.as_str(),
                "request rejected by API key gate"
            );
            (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY).into_response()
        }
    }
}

fn check(expected: Option<&str>, presented: Option<&[u8]>) -> Result<(), Rejection> {
    let expected = expected.ok_or(Rejection::Unconfigured)?;
    let presented = presented
        .filter(|value| !value.is_empty())
        .ok_or(Rejection::Missing)?;
    if constant_time_eq(expected.as_bytes(), presented) {
        Ok(())
    } else {
        Err(Rejection::Mismatch)
    }
}

/// Compares two byte strings without short-circuiting on the first
/// difference. Only the length is observable through timing.
fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    left.iter()
        .zip(right)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
