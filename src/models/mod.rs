//! Data models module
//!
//! Defines the classification and usage metadata structures for step output

pub mod classification;
pub mod usage;
