//! Service layer module
//!
//! Contains the step output classifier and the usage extractor

pub mod classifier;
pub mod extractor;

pub use classifier::{classify_output, classify_value, is_truthy, try_classify_output};
pub use extractor::{extract_usage, inspect_output};
