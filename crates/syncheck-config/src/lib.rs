//! Shared configuration for the syncheck daemon.
//!
//! [`Config`] is resolved once at start-up by layering, from lowest to
//! highest precedence, the built-in defaults, an optional TOML configuration
//! file, `SYNCHECK_*` environment variables and command-line flags. The
//! resulting value is immutable and shared by reference with every request
//! handler; nothing reads the process environment after start-up.
//!
//! | Field            | Environment               | Default   |
//! |------------------|---------------------------|-----------|
//! | `api_key`        | `SYNCHECK_API_KEY`        | *(unset)* |
//! | `host`           | `SYNCHECK_HOST`           | `0.0.0.0` |
//! | `port`           | `SYNCHECK_PORT`           | `8080`    |
//! | `language`       | `SYNCHECK_LANGUAGE`       | `go`      |
//! | `max_body_bytes` | `SYNCHECK_MAX_BODY_BYTES` | 2 MiB     |
//! | `log_filter`     | `SYNCHECK_LOG_FILTER`     | `info`    |
//! | `log_format`     | `SYNCHECK_LOG_FORMAT`     | `json`    |

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_HOST, DEFAULT_LANGUAGE, DEFAULT_LOG_FILTER, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT,
    default_host, default_language, default_log_filter, default_log_filter_string,
    default_log_format, default_max_body_bytes, default_port,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "SYNCHECK")]
pub struct Config {
    /// Shared secret expected in the `X-Api-Key` header. Empty means no
    /// credential is configured and every check request is rejected.
    #[serde(default)]
    #[ortho_config(default = String::new())]
    pub api_key: String,
    /// Interface the HTTP listener binds to.
    #[serde(default = "defaults::default_host")]
    #[ortho_config(default = defaults::default_host())]
    pub host: String,
    /// TCP port the HTTP listener binds to.
    #[serde(default = "defaults::default_port")]
    #[ortho_config(default = defaults::DEFAULT_PORT)]
    pub port: u16,
    /// Grammar checked by this deployment, e.g. `go` or `rust`.
    #[serde(default = "defaults::default_language")]
    #[ortho_config(default = defaults::default_language())]
    pub language: String,
    /// Largest accepted request body, in bytes.
    #[serde(default = "defaults::default_max_body_bytes")]
    #[ortho_config(default = defaults::DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
    /// `tracing` filter directive, e.g. `info` or `syncheckd=debug`.
    #[serde(default = "defaults::default_log_filter_string")]
    #[ortho_config(default = defaults::default_log_filter_string())]
    pub log_filter: String,
    /// Log output format.
    #[serde(default = "defaults::default_log_format")]
    #[ortho_config(default = defaults::default_log_format())]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns the configured credential, or `None` when it is unset or
    /// empty.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        Some(self.api_key.as_str()).filter(|key| !key.is_empty())
    }

    /// Returns the interface the listener binds to.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the listener port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns `host:port` suitable for binding a TCP listener.
    #[must_use]
    pub fn listen_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Returns the configured grammar identifier.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the request body limit in bytes.
    #[must_use]
    pub const fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// Returns the log filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            host: default_host(),
            port: default_port(),
            language: default_language(),
            max_body_bytes: default_max_body_bytes(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}
