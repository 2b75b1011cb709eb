//! Error types for parser operations.
//!
//! Syntax errors found *in* the submitted source are not errors of this
//! crate; they are reported through [`crate::ValidationResult`]. The types
//! here describe failures of the parsing machinery itself.

use thiserror::Error;

use crate::language::SupportedLanguage;

/// Errors raised while preparing or running a Tree-sitter parser.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser for a language.
    #[error("failed to initialise parser for {language}: {message}")]
    ParserInitError {
        /// The language that failed to initialise.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// The parser did not produce a syntax tree.
    #[error("failed to parse {language}: {message}")]
    ParseError {
        /// The language that failed to parse.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParserInitError {
            language,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParseError {
            language,
            message: message.into(),
        }
    }

    /// Returns the language the failing parser was configured for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        match self {
            Self::ParserInitError { language, .. } | Self::ParseError { language, .. } => {
                *language
            }
        }
    }
}
