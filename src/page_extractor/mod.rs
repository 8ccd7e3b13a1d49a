//! Page metadata extraction and the conversion result schema.

pub mod metadata;
pub mod schema;

pub use metadata::extract_metadata;
pub use schema::{ExtractionResult, PageMetadata};
