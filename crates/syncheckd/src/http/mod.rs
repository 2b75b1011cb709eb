//! HTTP surface of the daemon.
//!
//! | Route                   | Gate        | Response                       |
//! |-------------------------|-------------|--------------------------------|
//! | `POST /check/syntax`    | `X-Api-Key` | `{"valid": ..., "error": ...}` |
//! | `POST /check/gosyntax`  | `X-Api-Key` | same as `/check/syntax`        |
//! | `/privacy`, any method  | none        | fixed HTML notice              |
//!
//! Every request passes through the access log. The gate runs before the
//! body is read, so rejected requests never reach the validator.

mod access_log;
mod check;
mod gate;
mod privacy;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{any, post};

use syncheck_config::Config;
use syncheck_syntax::SyntaxValidator;

pub use check::{CheckRequest, CheckResponse};
pub use gate::API_KEY_HEADER;
pub use privacy::PRIVACY_NOTICE;

pub(crate) const HTTP_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::http");

/// Primary route for syntax checks.
pub const CHECK_ROUTE: &str = "/check/syntax";
/// Route kept for clients of the Go-only deployment.
pub const LEGACY_CHECK_ROUTE: &str = "/check/gosyntax";
/// Route serving the data-handling notice.
pub const PRIVACY_ROUTE: &str = "/privacy";

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    validator: Arc<dyn SyntaxValidator>,
}

impl AppState {
    /// Bundles the configuration and validator for the router.
    #[must_use]
    pub fn new(config: Arc<Config>, validator: Arc<dyn SyntaxValidator>) -> Self {
        Self { config, validator }
    }

    /// Returns the resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the validator serving check requests.
    #[must_use]
    pub fn validator(&self) -> &dyn SyntaxValidator {
        &*self.validator
    }
}

/// Builds the daemon router.
#[must_use]
pub fn router(state: AppState) -> Router {
    let checks = Router::new()
        .route(CHECK_ROUTE, post(check::check_syntax))
        .route(LEGACY_CHECK_ROUTE, post(check::check_syntax))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            gate::require_api_key,
        ));

    Router::new()
        .merge(checks)
        .route(PRIVACY_ROUTE, any(privacy::privacy_notice))
        .layer(DefaultBodyLimit::max(state.config().max_body_bytes()))
        .layer(middleware::from_fn(access_log::record_access))
        .with_state(state)
}
