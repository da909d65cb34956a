//! ETA certification flag.

use crate::core::{columns, Table};

/// Value written into the certification column on a match.
pub const ETA_APPROVED: &str = "mit ETA Zulassung";

/// Case-sensitive marker searched in title and description text.
const ETA_MARKER: &str = "ETA";

/// Overwrites the certification column for rows whose title or description
/// contains the `ETA` marker.
///
/// This is overwrite-on-match only: rows without a match keep whatever
/// value was loaded, so manually curated entries survive. A no-op without
/// the certification column; absent title/description cells never match.
pub fn annotate_eta_approval(table: &mut Table) {
    let Some(eta_idx) = table.column_index(columns::ETA_APPROVAL) else {
        return;
    };
    let text_columns: Vec<usize> = [columns::DESCRIPTION, columns::TITLE]
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    for row in 0..table.height() {
        let matched = text_columns
            .iter()
            .any(|&col| table.cell(row, col).is_some_and(|v| v.contains(ETA_MARKER)));
        if matched {
            table.set_cell(row, eta_idx, Some(ETA_APPROVED.to_string()));
        }
    }
}
