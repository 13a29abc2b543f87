//! Common utilities shared across the agentscore codebase.
//!
//! Key components:
//! - **Text utilities**: line splitting, import-line detection, keyword presence
//! - **Stats**: mean/variance/ratio with zero-denominator guards

pub mod stats;
pub mod text;

pub use stats::{clamp_unit, mean, ratio, variance};
pub use text::{
    contains_any, count_present, file_stem, import_lines, is_all_lowercase, is_import_line,
    split_lines,
};
