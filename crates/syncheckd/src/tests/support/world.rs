//! BDD test world for the HTTP contract: service configuration, the router
//! built from it, and the last response observed.

use std::cell::RefCell;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use syncheck_config::Config;
use syncheck_syntax::{SupportedLanguage, TreeSitterValidator};

use crate::http::{AppState, PRIVACY_ROUTE, router};

use super::request::{TestResponse, check_request, send};

/// Scenario world shared across BDD steps.
pub struct TestWorld {
    config: Config,
    runtime: tokio::runtime::Runtime,
    responses: Vec<TestResponse>,
}

impl TestWorld {
    /// Builds a world for a Go deployment without a credential.
    #[must_use]
    pub fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime builds");
        Self {
            config: Config::default(),
            runtime,
            responses: Vec::new(),
        }
    }

    /// Configures the expected credential; empty means none.
    pub fn set_api_key(&mut self, key: &str) {
        self.config.api_key = key.to_owned();
    }

    /// Selects the deployment grammar.
    pub fn set_language(&mut self, language: SupportedLanguage) {
        self.config.language = language.as_str().to_owned();
    }

    /// Sends a check request through a freshly built router.
    pub fn check(&mut self, key: Option<&str>, body: String) {
        let request = check_request(key, body);
        self.dispatch(request);
    }

    /// Requests the privacy page.
    pub fn privacy(&mut self) {
        let request = Request::builder()
            .method("GET")
            .uri(PRIVACY_ROUTE)
            .body(Body::empty())
            .expect("request builds");
        self.dispatch(request);
    }

    /// Returns the most recent response.
    #[must_use]
    pub fn last_response(&self) -> &TestResponse {
        self.responses.last().expect("a request was sent")
    }

    /// Returns every response in order.
    #[must_use]
    pub fn responses(&self) -> &[TestResponse] {
        &self.responses
    }

    fn dispatch(&mut self, request: Request<Body>) {
        let language = self
            .config
            .language()
            .parse::<SupportedLanguage>()
            .expect("configured language parses");
        let validator = TreeSitterValidator::new(language).expect("grammar loads");
        let app = router(AppState::new(
            Arc::new(self.config.clone()),
            Arc::new(validator),
        ));
        let response = self.runtime.block_on(send(app, request));
        self.responses.push(response);
    }
}

/// Fixture constructing a fresh world for each scenario.
#[must_use]
pub fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::new())
}
