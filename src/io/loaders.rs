use std::io::Read;
use std::path::Path;

use crate::core::Table;
use crate::error::Result;
use crate::parsing::csv_parser;

/// Result of loading a catalog file.
#[derive(Debug)]
pub struct CatalogLoadResult {
    pub table: Table,
    pub num_rows: usize,
    pub num_columns: usize,
}

impl CatalogLoadResult {
    pub fn new(table: Table) -> Self {
        let num_rows = table.height();
        let num_columns = table.width();
        Self {
            table,
            num_rows,
            num_columns,
        }
    }
}

/// Loader for semicolon-delimited catalog exports.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads a catalog CSV file into a [`Table`].
    pub fn load_from_file(path: &Path) -> Result<CatalogLoadResult> {
        let table = csv_parser::parse_catalog_csv(path)?;
        Ok(CatalogLoadResult::new(table))
    }

    /// Loads catalog CSV content from any reader.
    pub fn load_from_reader<R: Read>(source: R) -> Result<CatalogLoadResult> {
        let table = csv_parser::parse_catalog_reader(source)?;
        Ok(CatalogLoadResult::new(table))
    }
}
