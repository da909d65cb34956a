//! Product-catalog CSV transcoder.
//!
//! Normalizes product-catalog CSV exports: rewrites category taxonomies into
//! a canonical ` %% `/` > ` tree-path notation, strips blacklisted brand and
//! category entries, derives flag and attribute columns, and re-emits a
//! cleaned semicolon-delimited CSV together with a missing-image report.
//!
//! The main entry point is [`process_csv`], which takes the path of an input
//! CSV and returns the path of the cleaned output file. Callers that need
//! the missing-image diagnostics use [`pipeline::TranscodePipeline`]
//! directly.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod pipeline;
pub mod services;
pub mod transformations;

pub use error::{Result, TranscoderError};
pub use pipeline::{process_csv, TranscodeOutcome, TranscodePipeline};
