//! Denylist filters for the category and brand columns.

use crate::config::Blacklists;
use crate::transformations::categories::PATH_JOIN;

/// Drops every category path containing a blacklisted segment.
///
/// Paths are matched segment-by-segment in normalized form; one tainted
/// segment removes the whole path. Surviving paths keep their original
/// text and order.
pub fn strip_blacklisted_paths(cell: &str, lists: &Blacklists) -> String {
    if cell.is_empty() {
        return String::new();
    }
    cell.split("%%")
        .map(str::trim)
        .filter(|path| {
            !path
                .split('>')
                .map(str::trim)
                .any(|segment| lists.is_blacklisted_category(segment))
        })
        .collect::<Vec<_>>()
        .join(PATH_JOIN)
}

/// Blanks a brand cell when its normalized form is denylisted; every other
/// value passes through byte-identical.
pub fn filter_brand(value: &str, lists: &Blacklists) -> String {
    if lists.is_blacklisted_brand(value) {
        String::new()
    } else {
        value.to_string()
    }
}
