//! Tree-sitter parsing wrapper with error collection.
//!
//! This module provides a high-level interface for parsing source code using
//! Tree-sitter. Tree-sitter is error-tolerant: it always produces a tree and
//! marks the regions it could not parse with ERROR and MISSING nodes. The
//! [`ParseResult`] walks the whole tree so every detectable error is
//! reported, not only the first.

use std::fmt;
use std::ops::Range;

use crate::error::SyntaxError;
use crate::grammar;
use crate::language::SupportedLanguage;
use crate::position::point_to_one_based;

const CONTEXT_LIMIT: usize = 50;
const MESSAGE_SNIPPET_LIMIT: usize = 32;

/// Result of parsing source code.
///
/// Holds the syntax tree along with the source it was built from.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
    language: SupportedLanguage,
}

impl ParseResult {
    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the language of the parsed code.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns whether the source violates the grammar.
    ///
    /// This covers ERROR and MISSING nodes as well as top-level requirements
    /// the Tree-sitter grammar accepts leniently, such as Go's mandatory
    /// package clause.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        has_error_nodes(self.tree.root_node())
            || grammar::top_level_violation(self.language, self.root_node(), &self.source)
                .is_some()
    }

    /// Collects all syntax errors found in the parse result.
    ///
    /// Errors are returned in tree order; the top-level grammar violation,
    /// if any, comes last.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &self.source, &mut errors);
        if let Some(violation) =
            grammar::top_level_violation(self.language, self.root_node(), &self.source)
        {
            errors.push(violation);
        }
        errors
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

/// Information about a syntax error found during parsing.
///
/// Displays as `line:column: message`, the conventional compiler position
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    /// Creates a new syntax error info from a Tree-sitter node.
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let byte_range = node.byte_range();
        let context = source
            .get(byte_range.clone())
            .map(|text| truncate(text, CONTEXT_LIMIT))
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing '{}'", node.kind())
        } else {
            describe_unexpected(&context)
        };

        Self::at(node.start_position(), byte_range, context, message)
    }

    /// Creates an error anchored at an explicit point.
    pub(crate) fn at(
        point: tree_sitter::Point,
        byte_range: Range<usize>,
        context: String,
        message: String,
    ) -> Self {
        let (line, column) = point_to_one_based(point);
        Self {
            byte_range,
            line,
            column,
            context,
            message,
        }
    }

    /// Returns the one-based `(line, column)` pair.
    #[must_use]
    pub const fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}

impl fmt::Display for SyntaxErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Tree-sitter parser wrapper for a specific language.
///
/// Each parser instance is configured for a single language. Parsers are
/// cheap to create and hold mutable state, so callers create one per parse
/// rather than sharing one behind a lock.
pub struct Parser {
    inner: tree_sitter::Parser,
    language: SupportedLanguage,
}

impl Parser {
    /// Creates a new parser for the given language.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser cannot be initialised
    /// with the language grammar.
    pub fn new(language: SupportedLanguage) -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&language.tree_sitter_language())
            .map_err(|e| SyntaxError::parser_init(language, e.to_string()))?;

        Ok(Self { inner, language })
    }

    /// Returns the language this parser is configured for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Parses source code and returns the result.
    ///
    /// A result is returned even if the source contains syntax errors. Use
    /// [`ParseResult::has_errors`] to check for errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser fails to produce a syntax tree. This
    /// only happens when the parser is misconfigured.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse(self.language, "parser produced no tree"))?;

        Ok(ParseResult {
            tree,
            source: source.to_owned(),
            language: self.language,
        })
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

fn describe_unexpected(context: &str) -> String {
    let first_line = context.lines().next().unwrap_or_default().trim();
    if first_line.is_empty() {
        "syntax error".to_owned()
    } else {
        format!(
            "syntax error near '{}'",
            truncate(first_line, MESSAGE_SNIPPET_LIMIT)
        )
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let kept: String = text.chars().take(limit.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_owned()
    }
}

/// Recursively checks if a node or any of its descendants is an error.
fn has_error_nodes(node: tree_sitter::Node<'_>) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }

    let mut cursor = node.walk();
    node.children(&mut cursor).any(has_error_nodes)
}

/// Recursively collects all ERROR and MISSING nodes from a syntax tree.
///
/// Children of an ERROR node are not visited: the enclosing node already
/// describes the region.
fn collect_error_nodes(
    node: tree_sitter::Node<'_>,
    source: &str,
    errors: &mut Vec<SyntaxErrorInfo>,
) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node, source));
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, source, errors);
    }
}
