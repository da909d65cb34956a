//! Variant-group annotations driven by the grouping identifier.

use std::collections::HashMap;

use crate::core::{columns, Table};
use crate::error::Result;

/// Raw flag values recognized as true.
pub const TRUTHY_FLAGS: &[&str] = &["1", "True", "true"];

fn is_truthy(cell: Option<&str>) -> bool {
    cell.map(|v| TRUTHY_FLAGS.contains(&v.trim())).unwrap_or(false)
}

/// Rewrites the leader flag column to exactly `"true"` or `"false"`.
///
/// Recognized truthy spellings are `1`, `True` and `true`; everything else,
/// including absent cells, becomes `"false"`. A no-op without the column.
pub fn flag_group_leaders(table: &mut Table) {
    table.map_column(columns::GROUP_LEADER, |cell| {
        Some(if is_truthy(cell) { "true" } else { "false" }.to_string())
    });
}

/// Adds the sibling-count label column from the grouping identifier.
///
/// A frequency pre-pass over the whole table counts each identifier value;
/// rows in groups of two or more get `"<count> Varianten"`, all other rows
/// (including those without an identifier) get the empty label. Only runs
/// when the identifier column exists.
pub fn annotate_variant_counts(table: &mut Table) -> Result<()> {
    let Some(gid_idx) = table.column_index(columns::GROUP_ID) else {
        return Ok(());
    };

    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in 0..table.height() {
        if let Some(gid) = table.cell(row, gid_idx) {
            *counts.entry(gid.to_string()).or_insert(0) += 1;
        }
    }

    let labels: Vec<Option<String>> = (0..table.height())
        .map(|row| {
            let label = table
                .cell(row, gid_idx)
                .map(|gid| {
                    let count = counts.get(gid).copied().unwrap_or(1);
                    if count >= 2 {
                        format!("{} Varianten", count)
                    } else {
                        String::new()
                    }
                })
                .unwrap_or_default();
            Some(label)
        })
        .collect();

    table.set_column(columns::GROUP_COUNT, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(columns: &[&str], rows: &[&[Option<&str>]]) -> Table {
        let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table
                .push_row(row.iter().map(|c| c.map(str::to_string)).collect())
                .unwrap();
        }
        table
    }

    #[test]
    fn test_leader_flag_normalized() {
        let mut table = table_with(
            &["group_leader"],
            &[
                &[Some("1")],
                &[Some("True")],
                &[Some("true")],
                &[Some("yes")],
                &[Some(" 1 ")],
                &[None],
            ],
        );
        flag_group_leaders(&mut table);
        let expected = ["true", "true", "true", "false", "true", "false"];
        for (row, want) in expected.iter().enumerate() {
            assert_eq!(table.cell(row, 0), Some(*want));
        }
    }

    #[test]
    fn test_leader_flag_missing_column_noop() {
        let mut table = table_with(&["brand"], &[&[Some("Bosch")]]);
        let before = table.clone();
        flag_group_leaders(&mut table);
        assert_eq!(table, before);
    }

    #[test]
    fn test_variant_counts() {
        let mut table = table_with(
            &["group_id"],
            &[&[Some("A")], &[Some("A")], &[Some("B")], &[None]],
        );
        annotate_variant_counts(&mut table).unwrap();
        assert_eq!(table.cell_by_name(0, "group_count"), Some("2 Varianten"));
        assert_eq!(table.cell_by_name(1, "group_count"), Some("2 Varianten"));
        assert_eq!(table.cell_by_name(2, "group_count"), Some(""));
        assert_eq!(table.cell_by_name(3, "group_count"), Some(""));
    }

    #[test]
    fn test_variant_counts_without_identifier_column() {
        let mut table = table_with(&["brand"], &[&[Some("Bosch")]]);
        annotate_variant_counts(&mut table).unwrap();
        assert!(!table.has_column("group_count"));
    }
}
