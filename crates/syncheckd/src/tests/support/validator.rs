//! Validator doubles that record how often they are invoked.

use std::sync::atomic::{AtomicUsize, Ordering};

use syncheck_syntax::{
    SupportedLanguage, SyntaxError, SyntaxValidator, ValidationResult,
};

/// Validator returning a canned result.
#[derive(Debug)]
pub struct StubValidator {
    result: ValidationResult,
    calls: AtomicUsize,
}

impl StubValidator {
    /// Builds a stub that accepts every input.
    #[must_use]
    pub fn accepting() -> Self {
        Self {
            result: ValidationResult::Valid,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many times [`SyntaxValidator::validate`] ran.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SyntaxValidator for StubValidator {
    fn language(&self) -> SupportedLanguage {
        SupportedLanguage::Go
    }

    fn validate(&self, _source: &str) -> Result<ValidationResult, SyntaxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}

/// Validator whose parser never initialises.
#[derive(Debug, Default)]
pub struct FailingValidator;

impl SyntaxValidator for FailingValidator {
    fn language(&self) -> SupportedLanguage {
        SupportedLanguage::Go
    }

    fn validate(&self, _source: &str) -> Result<ValidationResult, SyntaxError> {
        Err(SyntaxError::parser_init(
            SupportedLanguage::Go,
            "grammar unavailable",
        ))
    }
}
