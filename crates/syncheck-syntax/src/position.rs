//! Position conversion helpers.
//!
//! Tree-sitter rows and columns are zero-based; diagnostics sent to clients
//! use one-based `line:column` pairs.

/// Converts a Tree-sitter point to one-based `(line, column)`.
#[must_use]
pub(crate) fn point_to_one_based(pos: tree_sitter::Point) -> (u32, u32) {
    // Snippets large enough to overflow u32 lines are clamped, not wrapped.
    let line = u32::try_from(pos.row.saturating_add(1)).unwrap_or(u32::MAX);
    let column = u32::try_from(pos.column.saturating_add(1)).unwrap_or(u32::MAX);
    (line, column)
}
