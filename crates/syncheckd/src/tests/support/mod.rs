//! Test harness utilities shared by the daemon suites.

mod config_loader;
mod reporter;
mod request;
mod validator;
mod world;

pub use config_loader::{FailingConfigLoader, TEST_API_KEY, TestConfigLoader};
pub use reporter::{HealthEvent, RecordingHealthReporter};
pub use request::{TestResponse, check_request, send};
pub use validator::{FailingValidator, StubValidator};
pub use world::{TestWorld, world};
