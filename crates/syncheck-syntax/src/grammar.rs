//! Top-level production checks that Tree-sitter grammars leave lenient.
//!
//! Tree-sitter grammars are written for editors and accept fragments. The
//! Go grammar, for instance, parses an empty document, a bare statement or
//! a second package clause as a valid `source_file`. A Go source file is a
//! package clause followed by imports and then declarations, each closed by
//! a semicolon or a line break. [`top_level_violation`] enforces that shape.

use std::ops::Range;

use crate::language::SupportedLanguage;
use crate::parser::SyntaxErrorInfo;

const COMMENT: &str = "comment";
const GO_PACKAGE_CLAUSE: &str = "package_clause";
const GO_IMPORT_DECLARATION: &str = "import_declaration";
const GO_DECLARATIONS: &[&str] = &[
    "function_declaration",
    "method_declaration",
    "const_declaration",
    "var_declaration",
    "type_declaration",
];

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Returns the violation of the language's top-level production, if any.
pub(crate) fn top_level_violation(
    language: SupportedLanguage,
    root: tree_sitter::Node<'_>,
    source: &str,
) -> Option<SyntaxErrorInfo> {
    match language {
        SupportedLanguage::Go => go_source_file_violation(root, source),
        SupportedLanguage::Rust | SupportedLanguage::Python | SupportedLanguage::TypeScript => None,
    }
}

fn go_source_file_violation(root: tree_sitter::Node<'_>, source: &str) -> Option<SyntaxErrorInfo> {
    let mut cursor = root.walk();
    let mut children = root
        .named_children(&mut cursor)
        .filter(|child| child.kind() != COMMENT);

    let package = match children.next() {
        Some(node) if node.kind() == GO_PACKAGE_CLAUSE => node,
        // The parser already reported this region.
        Some(node) if node.is_error() || node.is_missing() => return None,
        Some(node) => return Some(expected(node, source, "'package'")),
        None => {
            let end = source.len();
            return Some(SyntaxErrorInfo::at(
                root.end_position(),
                end..end,
                String::new(),
                "expected 'package', found 'EOF'".to_owned(),
            ));
        }
    };

    let mut previous = Some(package);
    let mut seen_declaration = false;
    for node in children {
        if node.is_error() || node.is_missing() {
            previous = None;
            continue;
        }
        if previous.is_some_and(|earlier| !terminated(earlier, node, source)) {
            return Some(expected(node, source, "';'"));
        }
        match node.kind() {
            GO_IMPORT_DECLARATION if seen_declaration => {
                return Some(at_node(
                    node,
                    source,
                    "imports must appear before other declarations".to_owned(),
                ));
            }
            GO_IMPORT_DECLARATION => {}
            kind if GO_DECLARATIONS.contains(&kind) => seen_declaration = true,
            _ => return Some(expected(node, source, "declaration")),
        }
        previous = Some(node);
    }
    None
}

/// Whether a line break or semicolon separates two top-level nodes.
fn terminated(earlier: tree_sitter::Node<'_>, later: tree_sitter::Node<'_>, source: &str) -> bool {
    earlier.end_position().row != later.start_position().row
        || source
            .get(earlier.end_byte()..later.start_byte())
            .is_some_and(|gap| gap.contains(';'))
}

fn expected(node: tree_sitter::Node<'_>, source: &str, what: &str) -> SyntaxErrorInfo {
    let found = describe_found(leading_token(source, node.byte_range()));
    at_node(node, source, format!("expected {what}, found {found}"))
}

fn at_node(node: tree_sitter::Node<'_>, source: &str, message: String) -> SyntaxErrorInfo {
    let context = leading_token(source, node.byte_range())
        .unwrap_or_default()
        .to_owned();
    SyntaxErrorInfo::at(node.start_position(), node.byte_range(), context, message)
}

/// Returns the first Go token in `range`, approximately as the Go scanner
/// would split it.
fn leading_token(source: &str, range: Range<usize>) -> Option<&str> {
    let text = source.get(range)?.trim_start();
    let first = text.chars().next()?;
    let end = if is_identifier_char(first) {
        text.find(|c: char| !is_identifier_char(c))
            .unwrap_or(text.len())
    } else if matches!(first, '"' | '`' | '\'') {
        text.char_indices()
            .skip(1)
            .find(|&(_, c)| c == first)
            .map_or(text.len(), |(index, c)| index + c.len_utf8())
    } else {
        first.len_utf8()
    };
    text.get(..end)
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Renders a token the way Go diagnostics do: identifiers and literals
/// bare, keywords and operators quoted.
fn describe_found(token: Option<&str>) -> String {
    match token {
        None => "'EOF'".to_owned(),
        Some(token) if is_literal(token) => token.to_owned(),
        Some(token) => format!("'{token}'"),
    }
}

fn is_literal(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| is_identifier_char(c) || matches!(c, '"' | '`' | '\''))
        && !GO_KEYWORDS.contains(&token)
}
