//! Built-in configuration defaults.

/// Default interface the daemon binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default TCP port for the HTTP listener.
pub const DEFAULT_PORT: u16 = 8080;

/// Default grammar checked by a deployment.
pub const DEFAULT_LANGUAGE: &str = "go";

/// Default upper bound on request bodies, in bytes (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Default log filter expression used by the daemon.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default bind host as an owned value (serde defaults need allocation).
pub fn default_host() -> String {
    DEFAULT_HOST.to_owned()
}

/// Default listener port.
pub const fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Default grammar identifier as an owned value.
pub fn default_language() -> String {
    DEFAULT_LANGUAGE.to_owned()
}

/// Default request body limit.
pub const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

/// Default log filter expression used by the daemon.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the daemon.
pub fn default_log_format() -> crate::logging::LogFormat {
    crate::logging::LogFormat::Json
}
