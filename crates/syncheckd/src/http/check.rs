//! Syntax check handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use syncheck_syntax::ValidationResult;

use super::{AppState, HTTP_TARGET};

const INVALID_BODY: &str = "Invalid request body";
const INTERNAL_ERROR: &str = "Internal Server Error";

/// Body of a check request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckRequest {
    /// Source text to check.
    pub code: String,
}

/// Body of a check response.
///
/// `error` is present exactly when `valid` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckResponse {
    /// Whether the source conforms to the grammar.
    pub valid: bool,
    /// Diagnostic for invalid source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ValidationResult> for CheckResponse {
    fn from(result: &ValidationResult) -> Self {
        Self {
            valid: result.is_valid(),
            error: result.diagnostic().map(ToString::to_string),
        }
    }
}

/// Decodes the request, validates the code and reports the outcome.
pub(crate) async fn check_syntax(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request = match decode(body) {
        Ok(request) => request,
        Err(reason) => {
            debug!(target: HTTP_TARGET, reason = %reason, "rejecting request body");
            return (StatusCode::BAD_REQUEST, INVALID_BODY).into_response();
        }
    };

    match state.validator().validate(&request.code) {
        Ok(result) => {
            debug!(
                target: HTTP_TARGET,
                language = %state.validator().language(),
                bytes = request.code.len(),
                valid = result.is_valid(),
                "syntax check completed"
            );
            Json(CheckResponse::from(&result)).into_response()
        }
        Err(source) => {
            error!(target: HTTP_TARGET, error = %source, "validator failed");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
        }
    }
}

fn decode(body: Result<Bytes, BytesRejection>) -> Result<CheckRequest, String> {
    let bytes = body.map_err(|rejection| rejection.body_text())?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|error| error.to_string())?;
    // serde also accepts a struct in sequence form; only objects are requests.
    if !value.is_object() {
        return Err("request body is not a JSON object".to_owned());
    }
    serde_json::from_value(value).map_err(|error| error.to_string())
}
