//! Core domain models for catalog tables.
//!
//! This module defines the in-memory table the transformation stages operate
//! on, plus the catalog column names the pipeline recognizes.

pub mod columns;
pub mod domain;

pub use domain::Table;
