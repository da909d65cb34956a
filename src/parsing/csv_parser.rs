use std::io::Read;
use std::path::Path;

use crate::core::Table;
use crate::error::Result;

/// Field separator of the catalog exports.
pub const DELIMITER: u8 = b';';

/// Parses a semicolon-delimited catalog CSV file into a [`Table`].
///
/// The header row is required; every field is read as text with no type
/// inference. Empty fields become absent cells, and rows shorter than the
/// header are padded with absent cells.
pub fn parse_catalog_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    read_table(&mut reader)
}

/// Parses catalog CSV content from any reader (useful for tests and
/// in-memory sources).
pub fn parse_catalog_reader<R: Read>(source: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    read_table(&mut reader)
}

fn read_table<R: Read>(reader: &mut csv::Reader<R>) -> Result<Table> {
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record?;
        let row: Vec<Option<String>> = (0..table.width())
            .map(|i| match record.get(i) {
                None | Some("") => None,
                Some(value) => Some(value.to_string()),
            })
            .collect();
        table.push_row(row)?;
    }
    Ok(table)
}
