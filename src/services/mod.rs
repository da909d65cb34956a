//! Read-only reporting over processed tables.

pub mod image_audit;

pub use image_audit::find_missing_images;
