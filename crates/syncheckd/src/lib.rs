//! The syncheck daemon.
//!
//! `syncheckd` answers one question over HTTP: is this snippet of source
//! text syntactically well-formed for the deployment's grammar? Clients
//! `POST` a JSON body `{"code": "..."}` to `/check/syntax` with the shared
//! secret in the `X-Api-Key` header and receive `{"valid": true}` or
//! `{"valid": false, "error": "line:column: message"}`.
//!
//! Start-up is split into two phases so each can be exercised in isolation:
//!
//! 1. [`bootstrap_with`] loads configuration through a [`ConfigLoader`],
//!    initialises structured telemetry, selects the grammar and builds the
//!    validator, reporting each outcome through a [`HealthReporter`].
//! 2. [`Server::serve`] binds the listener and serves requests until a
//!    [`ShutdownSignal`] fires, then drains in-flight requests.
//!
//! The request path holds no mutable shared state: the configuration is
//! read-only behind an `Arc` and a fresh parser is created per request.

mod bootstrap;
mod health;
mod http;
mod server;
mod shutdown;
mod telemetry;

pub use bootstrap::{
    BootstrapError, ConfigLoader, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
    bootstrap_with_validator,
};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use http::{
    API_KEY_HEADER, AppState, CHECK_ROUTE, CheckRequest, CheckResponse, LEGACY_CHECK_ROUTE,
    PRIVACY_NOTICE, PRIVACY_ROUTE, router,
};
pub use server::{ServeError, Server};
pub use shutdown::{ShutdownError, ShutdownSignal, SystemShutdownSignal};
pub use telemetry::{TelemetryError, TelemetryHandle};

#[cfg(test)]
mod tests;
