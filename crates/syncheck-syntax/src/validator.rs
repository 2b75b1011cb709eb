//! Syntax validation capability.
//!
//! [`SyntaxValidator`] is the narrow seam between the HTTP layer and the
//! grammar engine: text goes in, a [`ValidationResult`] comes out. The
//! production implementation is [`TreeSitterValidator`].

use crate::diagnostic::Diagnostic;
use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::parser::{Parser, SyntaxErrorInfo};

/// Outcome of validating one piece of source text.
///
/// `Valid` if and only if the parser accepted the input without error; the
/// diagnostic is present if and only if the result is `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The source conforms to the grammar.
    Valid,
    /// The source violates the grammar.
    Invalid(Diagnostic),
}

impl ValidationResult {
    /// Builds a result from the errors collected during a parse.
    #[must_use]
    pub fn from_errors(errors: Vec<SyntaxErrorInfo>) -> Self {
        Diagnostic::from_errors(errors).map_or(Self::Valid, Self::Invalid)
    }

    /// Returns whether the source was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the diagnostic for an invalid result.
    #[must_use]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Valid => None,
            Self::Invalid(diagnostic) => Some(diagnostic),
        }
    }
}

/// Capability that checks source text against one grammar.
///
/// Implementations must be pure: the same input always yields the same
/// result, and no state is carried between calls.
pub trait SyntaxValidator: Send + Sync {
    /// The grammar this validator checks against.
    fn language(&self) -> SupportedLanguage;

    /// Validates `source`.
    ///
    /// Syntax errors in `source` are reported as
    /// [`ValidationResult::Invalid`], never as `Err`.
    ///
    /// # Errors
    ///
    /// Returns an error only when the parser itself cannot run.
    fn validate(&self, source: &str) -> Result<ValidationResult, SyntaxError>;
}

/// Tree-sitter backed validator for a single language.
///
/// A fresh parser is created for every call, so the validator can be shared
/// across threads without locking.
#[derive(Debug, Clone, Copy)]
pub struct TreeSitterValidator {
    language: SupportedLanguage,
}

impl TreeSitterValidator {
    /// Creates a validator, checking that the grammar loads.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter grammar for `language` is
    /// incompatible with the linked Tree-sitter runtime.
    pub fn new(language: SupportedLanguage) -> Result<Self, SyntaxError> {
        Parser::new(language)?;
        Ok(Self { language })
    }
}

impl SyntaxValidator for TreeSitterValidator {
    fn language(&self) -> SupportedLanguage {
        self.language
    }

    fn validate(&self, source: &str) -> Result<ValidationResult, SyntaxError> {
        let mut parser = Parser::new(self.language)?;
        let parsed = parser.parse(source)?;
        Ok(ValidationResult::from_errors(parsed.errors()))
    }
}
