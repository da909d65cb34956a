//! Output serialization.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::core::Table;
use crate::error::Result;
use crate::parsing::csv_parser::DELIMITER;

/// Fixed marker carried in every output file name.
const OUTPUT_TAG: &str = "Python CSV Edit";

/// Builds the output path next to the input:
/// `"<input-stem> Python CSV Edit <YYYY-MM-DD_HH-MM>.csv"`.
pub fn output_path(input: &Path, timestamp: DateTime<Local>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!(
        "{} {} {}.csv",
        stem,
        OUTPUT_TAG,
        timestamp.format("%Y-%m-%d_%H-%M")
    );
    input.parent().unwrap_or(Path::new("")).join(name)
}

/// Serializes the table as semicolon-delimited CSV and writes it in one
/// pass.
///
/// Every field is quoted except pure numeric literals; absent cells are
/// written as empty fields. The whole file is serialized into memory first,
/// so a failing serialization leaves no file behind.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote_style(csv::QuoteStyle::NonNumeric)
            .from_writer(&mut buffer);
        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        writer.flush()?;
    }
    fs::write(path, &buffer)?;
    Ok(())
}
