//! Title-derived product attributes: steel finish and screw-head shape.

use crate::core::{columns, Table};
use crate::error::Result;

/// Finish detection rules, checked in order against the lower-cased title.
const MATERIAL_RULES: &[(&str, &str)] = &[
    ("edelstahl c1", "Edelstahl C1"),
    ("edelstahl a2", "Edelstahl A2"),
    ("edelstahl a4", "Edelstahl A4"),
    ("gelb verzinkt", "Stahl gelb verzinkt"),
];

/// Head shapes recognized in titles, first match wins.
pub const HEAD_SHAPES: &[&str] = &[
    "Tellerkopf",
    "Senkkopf",
    "Linsenkopf",
    "Hammerkopf",
    "ohne Kopf",
    "Rundkopf",
    "Zylinderkopf",
];

/// Derives the `material` and `kopfform` columns from the title text.
///
/// Both columns are created when missing; existing values are kept unless a
/// rule matches. The plain `verzinkt` fallback only fills an empty material
/// cell. Skipped entirely when the table has no title column.
pub fn annotate_title_attributes(table: &mut Table) -> Result<()> {
    let Some(title_idx) = table.column_index(columns::TITLE) else {
        return Ok(());
    };

    let materials = derive_materials(table, title_idx);
    table.set_column(columns::MATERIAL, materials)?;

    let shapes = derive_head_shapes(table, title_idx);
    table.set_column(columns::HEAD_SHAPE, shapes)
}

fn derive_materials(table: &Table, title_idx: usize) -> Vec<Option<String>> {
    let material_idx = table.column_index(columns::MATERIAL);
    (0..table.height())
        .map(|row| {
            let current = material_idx
                .and_then(|idx| table.cell(row, idx))
                .unwrap_or("")
                .to_string();
            let title = table.cell(row, title_idx).unwrap_or("").to_lowercase();

            let matched = MATERIAL_RULES
                .iter()
                .find(|(needle, _)| title.contains(needle))
                .map(|(_, finish)| (*finish).to_string());
            let value = match matched {
                Some(finish) => finish,
                None if current.is_empty() && title.contains("verzinkt") => {
                    "Stahl verzinkt".to_string()
                }
                None => current,
            };
            Some(value)
        })
        .collect()
}

fn derive_head_shapes(table: &Table, title_idx: usize) -> Vec<Option<String>> {
    let shape_idx = table.column_index(columns::HEAD_SHAPE);
    let needles: Vec<String> = HEAD_SHAPES.iter().map(|s| s.to_lowercase()).collect();
    (0..table.height())
        .map(|row| {
            let current = shape_idx
                .and_then(|idx| table.cell(row, idx))
                .unwrap_or("")
                .to_string();
            let title = table.cell(row, title_idx).unwrap_or("").to_lowercase();

            let value = needles
                .iter()
                .position(|needle| title.contains(needle))
                .map(|i| HEAD_SHAPES[i].to_string())
                .unwrap_or(current);
            Some(value)
        })
        .collect()
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
    fn test_material_and_shape_from_title() {
        let mut table = table_with(
            &["title"],
            &[&[Some("Spax Senkkopf Edelstahl A2 4x40")]],
        );
        annotate_title_attributes(&mut table).unwrap();
        assert_eq!(table.cell_by_name(0, "material"), Some("Edelstahl A2"));
        assert_eq!(table.cell_by_name(0, "kopfform"), Some("Senkkopf"));
    }

    #[test]
    fn test_gelb_verzinkt_beats_plain_verzinkt() {
        let mut table = table_with(&["title"], &[&[Some("Schraube gelb verzinkt")]]);
        annotate_title_attributes(&mut table).unwrap();
        assert_eq!(
            table.cell_by_name(0, "material"),
            Some("Stahl gelb verzinkt")
        );
    }

    #[test]
    fn test_plain_verzinkt_only_fills_empty_material() {
        let mut table = table_with(
            &["title", "material"],
            &[
                &[Some("Kammnagel verzinkt"), Some("Edelstahl")],
                &[Some("Kammnagel verzinkt"), None],
            ],
        );
        annotate_title_attributes(&mut table).unwrap();
        assert_eq!(table.cell_by_name(0, "material"), Some("Edelstahl"));
        assert_eq!(table.cell_by_name(1, "material"), Some("Stahl verzinkt"));
    }

    #[test]
    fn test_no_match_keeps_existing_values() {
        let mut table = table_with(
            &["title", "kopfform"],
            &[&[Some("Holzschraube"), Some("Senkkopf")]],
        );
        annotate_title_attributes(&mut table).unwrap();
        assert_eq!(table.cell_by_name(0, "kopfform"), Some("Senkkopf"));
        assert_eq!(table.cell_by_name(0, "material"), Some(""));
    }

    #[test]
    fn test_skipped_without_title_column() {
        let mut table = table_with(&["brand"], &[&[Some("Bosch")]]);
        annotate_title_attributes(&mut table).unwrap();
        assert!(!table.has_column("material"));
        assert!(!table.has_column("kopfform"));
    }
}
