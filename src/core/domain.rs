//! In-memory representation of a catalog CSV file.

use crate::error::{Result, TranscoderError};

/// An ordered table of text cells.
///
/// Rows are kept in input order end-to-end; the column set is fixed at load
/// time and only extended by derived columns. Every cell is text or absent
/// (an empty field in the input is loaded as absent).
///
/// # Examples
///
/// ```
/// use csv_transcoder::core::Table;
///
/// let mut table = Table::new(vec!["brand".to_string()]);
/// table.push_row(vec![Some("EVVA".to_string())]).unwrap();
///
/// assert_eq!(table.height(), 1);
/// assert_eq!(table.cell_by_name(0, "brand"), Some("EVVA"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table from column names and pre-assembled rows.
    ///
    /// Fails if any row width differs from the column count.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TranscoderError::Table(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of a column, if present. This is the schema probe consulted
    /// before every optional stage.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell content at (row, column index); `None` when the cell is absent
    /// or the position is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Cell content addressed by column name.
    pub fn cell_by_name(&self, row: usize, name: &str) -> Option<&str> {
        self.cell(row, self.column_index(name)?)
    }

    /// Overwrites a single cell; out-of-bounds positions are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Option<String>) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Appends a row. Fails if its width differs from the column count.
    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(TranscoderError::Table(format!(
                "row has {} cells, expected {}",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Creates or overwrites a whole column.
    ///
    /// Fails if the value count does not match the table height.
    pub fn set_column(&mut self, name: &str, values: Vec<Option<String>>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(TranscoderError::Table(format!(
                "column '{}' has {} values, expected {}",
                name,
                values.len(),
                self.rows.len()
            )));
        }
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Rewrites every cell of a column through `f`. A no-op when the column
    /// is missing.
    pub fn map_column<F>(&mut self, name: &str, mut f: F)
    where
        F: FnMut(Option<&str>) -> Option<String>,
    {
        let Some(idx) = self.column_index(name) else {
            return;
        };
        for row in &mut self.rows {
            let next = f(row[idx].as_deref());
            row[idx] = next;
        }
    }

    /// Iterates over rows in input order.
    pub fn rows(&self) -> impl Iterator<Item = &Vec<Option<String>>> {
        self.rows.iter()
    }
}
