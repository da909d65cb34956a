//! The catalog transformation pipeline.
//!
//! Orchestrates the column-scoped stages over one file: load, annotate
//! groups, normalize and filter categories, filter brands, set the ETA
//! flag, derive title attributes, write the output, and run the
//! missing-image audit. Processing one file is an atomic batch transform:
//! the output file only appears after every stage has succeeded.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use crate::config::{self, Blacklists};
use crate::core::{columns, Table};
use crate::error::{Result, TranscoderError};
use crate::io::{writer, CatalogLoader};
use crate::services::image_audit;
use crate::transformations::{attributes, blacklist, categories, eta, groups};

/// Result of transcoding one catalog file.
#[derive(Debug)]
pub struct TranscodeOutcome {
    /// Path of the written output file.
    pub output_path: PathBuf,
    /// Number of data rows processed.
    pub rows: usize,
    /// Identifiers of leader rows without an image reference.
    pub missing_images: Vec<String>,
}

/// The transformation pipeline, borrowing immutable denylist sets.
pub struct TranscodePipeline<'a> {
    blacklists: &'a Blacklists,
}

impl TranscodePipeline<'static> {
    /// Creates a pipeline over the process-wide default denylists.
    pub fn new() -> Self {
        Self {
            blacklists: config::default_blacklists(),
        }
    }
}

impl Default for TranscodePipeline<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TranscodePipeline<'a> {
    /// Creates a pipeline over caller-provided denylists.
    pub fn with_blacklists(blacklists: &'a Blacklists) -> Self {
        Self { blacklists }
    }

    /// Processes one catalog file end-to-end and returns the output path
    /// plus the missing-image report.
    ///
    /// Fails fast with [`TranscoderError::InputNotFound`] before any
    /// parsing when the input does not exist. Any stage failure aborts the
    /// file without writing output.
    pub fn process_file(&self, input: &Path) -> Result<TranscodeOutcome> {
        if !input.exists() {
            return Err(TranscoderError::InputNotFound(input.to_path_buf()));
        }

        let loaded = CatalogLoader::load_from_file(input)?;
        info!(
            "loaded {} rows x {} columns from {}",
            loaded.num_rows,
            loaded.num_columns,
            input.display()
        );

        let mut table = loaded.table;
        self.apply(&mut table)?;

        let output = writer::output_path(input, Local::now());
        writer::write_table(&table, &output)?;
        info!("wrote {}", output.display());

        let missing_images = image_audit::find_missing_images(&table);
        if !missing_images.is_empty() {
            debug!("{} rows without image reference", missing_images.len());
        }

        Ok(TranscodeOutcome {
            output_path: output,
            rows: table.height(),
            missing_images,
        })
    }

    /// Applies every transformation stage in order to an in-memory table.
    pub fn apply(&self, table: &mut Table) -> Result<()> {
        groups::flag_group_leaders(table);
        groups::annotate_variant_counts(table)?;

        if table.has_column(columns::CATEGORY) {
            let lists = self.blacklists;
            table.map_column(columns::CATEGORY, |cell| {
                Some(categories::normalize_category_cell(cell))
            });
            table.map_column(columns::CATEGORY, |cell| {
                Some(categories::clean_duplicate_flat(cell.unwrap_or("")))
            });
            table.map_column(columns::CATEGORY, |cell| {
                Some(blacklist::strip_blacklisted_paths(cell.unwrap_or(""), lists))
            });
        }

        if table.has_column(columns::BRAND) {
            let lists = self.blacklists;
            table.map_column(columns::BRAND, |cell| match cell {
                Some(value) => Some(blacklist::filter_brand(value, lists)),
                None => None,
            });
        }

        eta::annotate_eta_approval(table);
        attributes::annotate_title_attributes(table)?;
        Ok(())
    }
}

/// Transcodes one catalog CSV and returns the output path.
///
/// This is the single entry point consumed by the user-facing surfaces;
/// it uses the process-wide default denylists.
pub fn process_csv(input: &Path) -> Result<PathBuf> {
    TranscodePipeline::new()
        .process_file(input)
        .map(|outcome| outcome.output_path)
}
