//! Aggregation of syntax errors into a single client-facing diagnostic.

use std::fmt;

use crate::parser::SyntaxErrorInfo;

/// Ordered, non-empty set of syntax errors from one parse.
///
/// Errors are sorted by position and exact duplicates are removed. The
/// [`Display`](fmt::Display) form reports the first error verbatim and
/// summarises the remainder, e.g. `4:2: missing '}' (and 2 more errors)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    errors: Vec<SyntaxErrorInfo>,
}

impl Diagnostic {
    /// Builds a diagnostic from parser errors.
    ///
    /// Returns `None` when `errors` is empty: a parse without errors has no
    /// diagnostic.
    #[must_use]
    pub fn from_errors(mut errors: Vec<SyntaxErrorInfo>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        errors.sort_by(|left, right| {
            left.position()
                .cmp(&right.position())
                .then_with(|| left.message.cmp(&right.message))
        });
        errors.dedup_by(|later, earlier| {
            later.position() == earlier.position() && later.message == earlier.message
        });
        Some(Self { errors })
    }

    /// Returns all errors in position order.
    #[must_use]
    pub fn errors(&self) -> &[SyntaxErrorInfo] {
        &self.errors
    }

    /// Returns the earliest error.
    #[must_use]
    pub fn first(&self) -> Option<&SyntaxErrorInfo> {
        self.errors.first()
    }

    /// Returns the number of distinct errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns whether the diagnostic holds no errors.
    ///
    /// Constructed diagnostics always hold at least one error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.errors.first() else {
            return Ok(());
        };
        write!(f, "{first}")?;
        match self.errors.len().saturating_sub(1) {
            0 => Ok(()),
            1 => f.write_str(" (and 1 more error)"),
            more => write!(f, " (and {more} more errors)"),
        }
    }
}
