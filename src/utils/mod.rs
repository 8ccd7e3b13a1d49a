pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{char_width, collapse_whitespace, pad_end};
