//! Test configuration loaders for success and failure paths.

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use syncheck_config::{Config, LogFormat};

use crate::bootstrap::ConfigLoader;

/// Credential configured by [`TestConfigLoader::new`].
pub const TEST_API_KEY: &str = "k1";

/// Loader returning a loopback configuration on an ephemeral port.
#[derive(Debug, Clone)]
pub struct TestConfigLoader {
    config: Config,
}

impl TestConfigLoader {
    /// Builds a loader with the `k1` credential and the Go grammar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config {
                api_key: TEST_API_KEY.to_owned(),
                host: "127.0.0.1".to_owned(),
                port: 0,
                log_format: LogFormat::Compact,
                ..Config::default()
            },
        }
    }

    /// Removes the credential.
    #[must_use]
    pub fn without_api_key(mut self) -> Self {
        self.config.api_key = String::new();
        self
    }

    /// Selects the grammar by name.
    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.config.language = language.to_owned();
        self
    }

    /// Binds to a fixed port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }
}

impl ConfigLoader for TestConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Loader that intentionally fails by passing invalid CLI arguments.
pub struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let args = vec![
            OsString::from("syncheckd"),
            OsString::from("--port"),
            OsString::from("not-a-port"),
        ];
        Config::load_from_iter(args)
    }
}
