//! AI Metadata Scan Library
//!
//! Detects AI step output and extracts token usage metadata from arbitrary JSON payloads

pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use models::{classification, usage};
pub use models::classification::AiClassification;
pub use models::usage::{AiUsageInfo, UsageField};
pub use services::{classify_output, classify_value, extract_usage, inspect_output, try_classify_output};
pub use utils::error::{InspectError, InspectResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
