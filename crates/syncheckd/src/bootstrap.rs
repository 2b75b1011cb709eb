//! Daemon bootstrap orchestration.

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;

use syncheck_config::Config;
use syncheck_syntax::{
    LanguageParseError, SupportedLanguage, SyntaxError, SyntaxValidator, TreeSitterValidator,
};

use crate::health::HealthReporter;
use crate::server::Server;
use crate::telemetry::{self, TelemetryError};

/// Unprefixed variables honoured when their `SYNCHECK_*` counterpart is
/// unset: `(legacy, prefixed, flag)`.
const LEGACY_VARIABLES: &[(&str, &str, &str)] = &[
    ("API_KEY", "SYNCHECK_API_KEY", "--api-key"),
    ("PORT", "SYNCHECK_PORT", "--port"),
];

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the daemon configuration.
    ///
    /// # Errors
    ///
    /// Returns the loader error when any configuration layer is invalid.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that reads the process arguments and environment.
///
/// The unprefixed `API_KEY` and `PORT` variables are honoured as fallbacks
/// for deployments configured for the Go-only service. They are injected
/// ahead of the real arguments, so explicit flags still win and a set
/// `SYNCHECK_*` variable suppresses the fallback entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let args = with_legacy_overrides(std::env::args_os(), |key| std::env::var_os(key));
        Config::load_from_iter(args)
    }
}

/// Loader that returns a fixed configuration.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Wraps `config` in a loader.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Splices fallback flags for unprefixed legacy variables after the program
/// name.
pub(crate) fn with_legacy_overrides<I, F>(args: I, lookup: F) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
    F: Fn(&str) -> Option<OsString>,
{
    let mut args = args.into_iter();
    let mut spliced: Vec<OsString> = args.next().into_iter().collect();
    if spliced.is_empty() {
        spliced.push(OsString::from(env!("CARGO_PKG_NAME")));
    }

    for (legacy, prefixed, flag) in LEGACY_VARIABLES {
        if lookup(prefixed).is_some() {
            continue;
        }
        if let Some(value) = lookup(legacy).filter(|value| !value.is_empty()) {
            spliced.push(OsString::from(*flag));
            spliced.push(value);
        }
    }

    spliced.extend(args);
    spliced
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
    /// The configured language is not supported.
    #[error("invalid language setting: {source}")]
    Language {
        /// Underlying parse error.
        #[source]
        source: LanguageParseError,
    },
    /// The grammar for the configured language failed to load.
    #[error("failed to load grammar: {source}")]
    Grammar {
        /// Underlying parser error.
        #[source]
        source: SyntaxError,
    },
}

/// Bootstraps the daemon with the tree-sitter validator for the configured
/// language.
///
/// # Errors
///
/// Returns a [`BootstrapError`] describing the first stage that failed. The
/// failure is also reported through `reporter`.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
) -> Result<Server, BootstrapError> {
    bootstrap_with_validator(loader, reporter, |language| {
        TreeSitterValidator::new(language)
            .map(|validator| Arc::new(validator) as Arc<dyn SyntaxValidator>)
    })
}

/// Bootstraps the daemon, building the validator with `build_validator`.
///
/// # Errors
///
/// Returns a [`BootstrapError`] describing the first stage that failed.
pub fn bootstrap_with_validator<F>(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
    build_validator: F,
) -> Result<Server, BootstrapError>
where
    F: FnOnce(SupportedLanguage) -> Result<Arc<dyn SyntaxValidator>, SyntaxError>,
{
    reporter.bootstrap_starting();

    let config = match loader.load() {
        Ok(config) => config,
        Err(source) => return Err(fail(&*reporter, BootstrapError::Configuration { source })),
    };

    let telemetry = match telemetry::initialise(&config) {
        Ok(handle) => handle,
        Err(source) => return Err(fail(&*reporter, BootstrapError::Telemetry { source })),
    };

    let language = match config.language().parse::<SupportedLanguage>() {
        Ok(language) => language,
        Err(source) => return Err(fail(&*reporter, BootstrapError::Language { source })),
    };

    let validator = match build_validator(language) {
        Ok(validator) => validator,
        Err(source) => return Err(fail(&*reporter, BootstrapError::Grammar { source })),
    };

    if config.api_key().is_none() {
        reporter.credential_missing();
    }
    reporter.bootstrap_succeeded(&config, language);

    Ok(Server::new(
        Arc::new(config),
        validator,
        telemetry,
        reporter,
    ))
}

fn fail(reporter: &dyn HealthReporter, error: BootstrapError) -> BootstrapError {
    reporter.bootstrap_failed(&error);
    error
}
