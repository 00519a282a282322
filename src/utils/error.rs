//! Error handling module
//!
//! Defines error types used when inspecting step output

use thiserror::Error;

/// Inspection error types
#[derive(Error, Debug)]
pub enum InspectError {
    /// Raw step output is not valid JSON
    #[error("Malformed step output: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// Result type alias used across the library
pub type InspectResult<T> = Result<T, InspectError>;
