//! HTTP server lifecycle.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use syncheck_config::Config;
use syncheck_syntax::SyntaxValidator;

use crate::health::HealthReporter;
use crate::http::{self, AppState};
use crate::shutdown::{self, ShutdownError, ShutdownSignal};
use crate::telemetry::TelemetryHandle;

/// Errors surfaced while serving requests.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Binding the listener failed.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address the daemon attempted to bind.
        address: String,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Accepting or serving connections failed.
    #[error("server error: {source}")]
    Serve {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The shutdown listener failed, so the server stopped early.
    #[error("shutdown listener failed: {source}")]
    Shutdown {
        /// Underlying shutdown error.
        #[source]
        source: ShutdownError,
    },
}

/// Result of a successful bootstrap: a configured, not yet listening server.
pub struct Server {
    config: Arc<Config>,
    validator: Arc<dyn SyntaxValidator>,
    telemetry: TelemetryHandle,
    reporter: Arc<dyn HealthReporter>,
}

impl Server {
    pub(crate) fn new(
        config: Arc<Config>,
        validator: Arc<dyn SyntaxValidator>,
        telemetry: TelemetryHandle,
        reporter: Arc<dyn HealthReporter>,
    ) -> Self {
        Self {
            config,
            validator,
            telemetry,
            reporter,
        }
    }

    /// Accessor for the resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Accessor for the validator serving check requests.
    #[must_use]
    pub fn validator(&self) -> &dyn SyntaxValidator {
        &*self.validator
    }

    /// Accessor for the telemetry handle, primarily useful for testing.
    #[must_use]
    pub const fn telemetry(&self) -> TelemetryHandle {
        self.telemetry
    }

    /// Builds the request router over this server's shared state.
    #[must_use]
    pub fn router(&self) -> Router {
        http::router(AppState::new(
            Arc::clone(&self.config),
            Arc::clone(&self.validator),
        ))
    }

    /// Binds the configured address and serves until `signal` fires.
    ///
    /// In-flight requests are drained before this returns.
    ///
    /// # Errors
    ///
    /// Returns a [`ServeError`] when binding fails, the server fails, or the
    /// shutdown listener cannot be installed.
    pub async fn serve<S>(self, signal: S) -> Result<(), ServeError>
    where
        S: ShutdownSignal + 'static,
    {
        let address = self.config.listen_address();
        let result = self.bind_and_serve(&address, signal).await;
        match &result {
            Ok(()) => self.reporter.server_stopped(),
            Err(error) => self.reporter.server_failed(error),
        }
        result
    }

    async fn bind_and_serve<S>(&self, address: &str, signal: S) -> Result<(), ServeError>
    where
        S: ShutdownSignal + 'static,
    {
        let bind_error = |source| ServeError::Bind {
            address: address.to_owned(),
            source,
        };
        let listener = TcpListener::bind(address).await.map_err(bind_error)?;
        let local: SocketAddr = listener.local_addr().map_err(bind_error)?;
        self.reporter.listener_ready(local);

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let shutdown = async move {
            let outcome = shutdown::wait_for(signal).await;
            // The receiver only disappears once serving already ended.
            drop(outcome_tx.send(outcome));
        };

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| ServeError::Serve { source })?;

        match outcome_rx.await {
            Ok(Err(source)) => Err(ServeError::Shutdown { source }),
            Ok(Ok(())) | Err(_) => Ok(()),
        }
    }
}

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("listen_address", &self.config.listen_address())
            .field("language", &self.validator.language())
            .finish_non_exhaustive()
    }
}
