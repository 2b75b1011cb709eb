//! Structured health reporting for daemon lifecycle events.

use std::net::SocketAddr;
use std::sync::Arc;

use syncheck_config::Config;
use syncheck_syntax::SupportedLanguage;

use crate::bootstrap::BootstrapError;
use crate::server::ServeError;

const HEALTH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::health");

/// Observer trait used to surface lifecycle events to telemetry sinks.
pub trait HealthReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn bootstrap_starting(&self);

    /// Invoked after bootstrap completes successfully.
    fn bootstrap_succeeded(&self, config: &Config, language: SupportedLanguage);

    /// Invoked when bootstrap fails.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked when no credential is configured, so every check request
    /// will be rejected.
    fn credential_missing(&self);

    /// Invoked once the HTTP listener is bound.
    fn listener_ready(&self, address: SocketAddr);

    /// Invoked after the server drained and stopped.
    fn server_stopped(&self);

    /// Invoked when serving fails.
    fn server_failed(&self, error: &ServeError);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config, language: SupportedLanguage) {
        (**self).bootstrap_succeeded(config, language);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn credential_missing(&self) {
        (**self).credential_missing();
    }

    fn listener_ready(&self, address: SocketAddr) {
        (**self).listener_ready(address);
    }

    fn server_stopped(&self) {
        (**self).server_stopped();
    }

    fn server_failed(&self, error: &ServeError) {
        (**self).server_failed(error);
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_starting",
            "starting daemon bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config, language: SupportedLanguage) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            listen_address = %config.listen_address(),
            language = %language,
            max_body_bytes = config.max_body_bytes(),
            log_filter = %config.log_filter(),
            log_format = %config.log_format(),
            "daemon bootstrap completed"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "daemon bootstrap failed"
        );
    }

    fn credential_missing(&self) {
        tracing::warn!(
            target: HEALTH_TARGET,
            event = "credential_missing",
            "no API key configured; every check request will be rejected"
        );
    }

    fn listener_ready(&self, address: SocketAddr) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "listener_ready",
            address = %address,
            "listening for requests"
        );
    }

    fn server_stopped(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "server_stopped",
            "server stopped"
        );
    }

    fn server_failed(&self, error: &ServeError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "server_failed",
            error = %error,
            "server failed"
        );
    }
}
