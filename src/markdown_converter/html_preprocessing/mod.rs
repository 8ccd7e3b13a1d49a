//! HTML preprocessing stages run before markdown rendering.
//!
//! - Main content extraction via a fixed selector priority list
//! - Noise filtering (boilerplate tags and denylisted regions)
//! - Definition list and table formatting

pub mod dom_serialization;
pub mod html_cleaning;
pub mod main_content_extraction;
pub mod structured_data;
pub mod text_block;

pub use html_cleaning::filter_noise;
pub use main_content_extraction::extract_main_content;
pub use structured_data::{STRUCTURED_BLOCK_TAG, format_structured_data};
