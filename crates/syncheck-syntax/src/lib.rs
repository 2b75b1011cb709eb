//! Tree-sitter powered syntax checking for the syncheck service.
//!
//! This crate answers one question about a piece of source text: is it
//! syntactically well-formed for the configured grammar? It provides:
//!
//! - **Parsing** via [`Parser`], which wraps Tree-sitter and exposes every
//!   error node as a [`SyntaxErrorInfo`] with one-based positions
//! - **Diagnostics** via [`Diagnostic`], which orders and aggregates the
//!   errors of one parse into a single client-facing message
//! - **Validation** via the [`SyntaxValidator`] capability and its
//!   [`TreeSitterValidator`] implementation, producing a [`ValidationResult`]
//!
//! # Supported Languages
//!
//! One grammar is selected per deployment:
//! - Go (the default)
//! - Rust
//! - Python
//! - TypeScript
//!
//! # Example
//!
//! ```
//! use syncheck_syntax::{SupportedLanguage, SyntaxValidator, TreeSitterValidator};
//!
//! let validator = TreeSitterValidator::new(SupportedLanguage::Go)?;
//!
//! let result = validator.validate("package main\nfunc main() {}")?;
//! assert!(result.is_valid());
//!
//! let result = validator.validate("package main\nfunc main({")?;
//! assert!(!result.is_valid());
//! # Ok::<(), syncheck_syntax::SyntaxError>(())
//! ```

mod diagnostic;
mod error;
mod grammar;
mod language;
mod parser;
mod position;
mod validator;

pub use diagnostic::Diagnostic;
pub use error::SyntaxError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use parser::{ParseResult, Parser, SyntaxErrorInfo};
pub use validator::{SyntaxValidator, TreeSitterValidator, ValidationResult};

#[cfg(test)]
mod tests;
