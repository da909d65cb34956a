//! Missing-image audit.
//!
//! Runs read-only over the post-transform table and reports the rows that
//! lack an image reference. The report is handed back to the caller as a
//! diagnostic; it is never written into the output file.

use std::collections::HashSet;

use crate::core::{columns, Table};
use crate::transformations::groups::TRUTHY_FLAGS;

/// Collects identifiers of rows without an image reference.
///
/// A row is missing its image when the `image_link` cell is absent or blank
/// after trim. When a leader column is present (either accepted spelling),
/// only rows whose leader flag is truthy are candidates; otherwise every
/// row is. Identifiers come from the `id` column when present (deduplicated,
/// order-stable by first occurrence; rows without an id contribute their
/// positional index), else positional indices as text. Without an
/// `image_link` column the audit is skipped and the report is empty.
pub fn find_missing_images(table: &Table) -> Vec<String> {
    let Some(image_idx) = table.column_index(columns::IMAGE_LINK) else {
        return Vec::new();
    };
    let leader_idx = table
        .column_index(columns::GROUP_LEADER)
        .or_else(|| table.column_index(columns::GROUP_LEADER_ALT));
    let id_idx = table.column_index(columns::ID);

    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for row in 0..table.height() {
        if let Some(leader) = leader_idx {
            let is_leader = table
                .cell(row, leader)
                .map(|v| TRUTHY_FLAGS.contains(&v.trim()))
                .unwrap_or(false);
            if !is_leader {
                continue;
            }
        }

        let has_image = table
            .cell(row, image_idx)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false);
        if has_image {
            continue;
        }

        let ident = id_idx
            .and_then(|idx| table.cell(row, idx))
            .map(str::to_string)
            .unwrap_or_else(|| row.to_string());
        if seen.insert(ident.clone()) {
            missing.push(ident);
        }
    }
    missing
}
