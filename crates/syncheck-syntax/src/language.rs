//! Grammar selection.
//!
//! A deployment checks exactly one language. [`SupportedLanguage`] names the
//! available Tree-sitter grammars and is parsed from configuration values.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Languages whose syntax can be checked.
///
/// Each variant maps to a Tree-sitter grammar that can parse source code
/// for that language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportedLanguage {
    /// Go.
    #[default]
    Go,
    /// Rust.
    Rust,
    /// Python.
    Python,
    /// TypeScript, parsed with the TSX grammar.
    TypeScript,
}

impl SupportedLanguage {
    /// Returns the Tree-sitter language grammar for this language.
    #[must_use]
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            // TSX is a superset, so plain `.ts` snippets parse too.
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Returns the lower-case identifier for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Go, Self::Rust, Self::Python, Self::TypeScript]
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a language identifier fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language: '{0}'")]
pub struct LanguageParseError(String);

impl LanguageParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for SupportedLanguage {
    type Err = LanguageParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "go" | "golang" => Ok(Self::Go),
            "rust" | "rs" => Ok(Self::Rust),
            "python" | "py" => Ok(Self::Python),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(LanguageParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("go", SupportedLanguage::Go)]
    #[case(" Golang ", SupportedLanguage::Go)]
    #[case("rust", SupportedLanguage::Rust)]
    #[case("Python", SupportedLanguage::Python)]
    #[case("TYPESCRIPT", SupportedLanguage::TypeScript)]
    fn from_str_parses_language_names(#[case] input: &str, #[case] expected: SupportedLanguage) {
        assert_eq!(SupportedLanguage::from_str(input), Ok(expected));
    }

    #[test]
    fn from_str_returns_error_for_unknown() {
        let error = "cobol".parse::<SupportedLanguage>().expect_err("unknown");
        assert_eq!(error.input(), "cobol");
        assert_eq!(error.to_string(), "unsupported language: 'cobol'");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for language in SupportedLanguage::all() {
            assert_eq!(language.to_string().parse::<SupportedLanguage>(), Ok(*language));
        }
    }

    #[test]
    fn go_is_the_default_grammar() {
        assert_eq!(SupportedLanguage::default(), SupportedLanguage::Go);
    }
}
