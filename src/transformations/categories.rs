//! Category-cell normalization.
//!
//! Rewrites the serialized list-or-string category cells into the canonical
//! notation: individual paths joined by ` %% `, path segments joined by
//! ` > `.

use std::collections::HashSet;

use crate::parsing::{parse_cell_literal, CellLiteral};

/// Joins multiple category paths inside one cell.
pub const PATH_JOIN: &str = " %% ";

/// Joins the segments of one category path.
pub const SEGMENT_JOIN: &str = " > ";

/// Normalizes one raw category cell.
///
/// Absent and blank cells yield the empty string. Literal syntax is decoded
/// through the restricted literal parser; text that fails to parse is kept
/// as a single flat entry, trimmed. Entries containing `;` are treated as
/// serialized hierarchies and rewritten with [`SEGMENT_JOIN`].
pub fn normalize_category_cell(raw: Option<&str>) -> String {
    let Some(text) = raw else {
        return String::new();
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match parse_cell_literal(trimmed) {
        Some(CellLiteral::List(items)) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(expand_hierarchy)
            .collect::<Vec<_>>()
            .join(PATH_JOIN),
        Some(CellLiteral::Text(value)) => {
            let value = value.trim();
            if value.contains(';') {
                join_segments(value)
            } else {
                value.to_string()
            }
        }
        // parsed, but neither list nor string: nothing usable in the cell
        Some(CellLiteral::Other(_)) => String::new(),
        None => {
            if trimmed == "[]" {
                String::new()
            } else {
                trimmed.to_string()
            }
        }
    }
}

fn expand_hierarchy(entry: &str) -> String {
    if entry.contains(';') {
        join_segments(entry)
    } else {
        entry.to_string()
    }
}

fn join_segments(entry: &str) -> String {
    entry
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(SEGMENT_JOIN)
}

/// Removes flat entries that duplicate the root of a tree entry in the same
/// cell, so `Tools %% Tools > Hand Tools` keeps only the deeper path.
///
/// Entries are trimmed; entries reduced to empty are dropped. Order of the
/// survivors is preserved.
pub fn clean_duplicate_flat(cell: &str) -> String {
    if cell.is_empty() {
        return String::new();
    }
    let entries: Vec<&str> = cell.split("%%").map(str::trim).collect();
    let tree_roots: HashSet<&str> = entries
        .iter()
        .filter(|entry| entry.contains('>'))
        .filter_map(|entry| entry.split('>').next())
        .map(str::trim)
        .collect();
    entries
        .iter()
        .filter(|entry| entry.contains('>') || !tree_roots.contains(*entry))
        .filter(|entry| !entry.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(PATH_JOIN)
}
