//! Test double for [`HealthReporter`] that records structured events for assertions.

use std::net::SocketAddr;
use std::sync::Mutex;

use syncheck_config::Config;
use syncheck_syntax::SupportedLanguage;

use crate::bootstrap::BootstrapError;
use crate::health::HealthReporter;
use crate::server::ServeError;

/// Structured health events tracked during tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthEvent {
    /// Bootstrap started.
    BootstrapStarting,
    /// Bootstrap completed for the given grammar.
    BootstrapSucceeded(SupportedLanguage),
    /// Bootstrap failed with an error description.
    BootstrapFailed(String),
    /// No credential was configured.
    CredentialMissing,
    /// The listener was bound.
    ListenerReady(SocketAddr),
    /// The server stopped cleanly.
    ServerStopped,
    /// The server failed with an error description.
    ServerFailed(String),
}

/// Records health events for assertions.
#[derive(Debug, Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Captures a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .clone()
    }

    /// Returns the bound address once the listener is ready.
    #[must_use]
    pub fn listener_address(&self) -> Option<SocketAddr> {
        self.events().into_iter().find_map(|event| match event {
            HealthEvent::ListenerReady(address) => Some(address),
            _ => None,
        })
    }

    fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .push(event);
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config, language: SupportedLanguage) {
        self.record(HealthEvent::BootstrapSucceeded(language));
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn credential_missing(&self) {
        self.record(HealthEvent::CredentialMissing);
    }

    fn listener_ready(&self, address: SocketAddr) {
        self.record(HealthEvent::ListenerReady(address));
    }

    fn server_stopped(&self) {
        self.record(HealthEvent::ServerStopped);
    }

    fn server_failed(&self, error: &ServeError) {
        self.record(HealthEvent::ServerFailed(error.to_string()));
    }
}
