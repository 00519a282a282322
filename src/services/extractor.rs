//! AI usage extractor
//!
//! Recursively scans a step output value for token counts and model names.
//! Best effort: the first value found for each field wins and later matches
//! are discarded.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::usage::{AiUsageInfo, UsageField};
use crate::services::classifier::classify_output;

//
// regex pattern to match the key pieces of ai information in outputs:
// promptTokens, completionTokens, totalTokens, model and common variations
// such as prompt_tokens, modelId, etc.
static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:prompt|completion|total|model|modelId)[ _]?(?:tokens?|model|modelId)?\b")
        .expect("regex: ai key pattern")
});

/// Substring rules deciding which usage field a matched key feeds
///
/// Evaluated in order; the first hit wins when a key matches several rules,
/// so the order must not change.
const FIELD_RULES: &[(&str, UsageField)] = &[
    ("prompt", UsageField::PromptTokens),
    ("completion", UsageField::CompletionTokens),
    ("total", UsageField::TotalTokens),
    ("model", UsageField::Model),
];

/// Extract AI usage metadata from an output value
///
/// Depth-first walk over nested objects and arrays. Object entries are
/// visited in the map's enumeration order, array elements in index order.
/// Total over any JSON value; a scalar root simply yields an empty result.
pub fn extract_usage(value: &Value) -> AiUsageInfo {
    let mut usage = AiUsageInfo::default();
    scan_value(value, &mut usage);
    usage
}

/// Classify raw step output and extract its usage metadata in one call
///
/// Returns `None` for non-AI and malformed payloads.
pub fn inspect_output(raw: &str) -> Option<AiUsageInfo> {
    classify_output(raw)
        .into_output()
        .map(|obj| extract_usage(&Value::Object(obj)))
}

fn scan_value(value: &Value, usage: &mut AiUsageInfo) {
    match value {
        Value::Object(obj) => {
            for (key, child) in obj {
                if usage.is_complete() {
                    return;
                }
                match child {
                    // A matching key can still hold nested matches underneath
                    Value::Object(_) | Value::Array(_) => scan_value(child, usage),
                    scalar => {
                        if let Some(field) = classify_key(key) {
                            usage.fill(field, scalar.clone());
                        }
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if usage.is_complete() {
                    return;
                }
                // Scalar elements have no key to match against
                if matches!(item, Value::Object(_) | Value::Array(_)) {
                    scan_value(item, usage);
                }
            }
        }
        _ => {}
    }
}

/// Map an output key onto a usage field
///
/// Returns `None` when the key carries no recognizable AI information.
fn classify_key(key: &str) -> Option<UsageField> {
    if !KEY_PATTERN.is_match(key) {
        return None;
    }

    let lowered = key.to_ascii_lowercase();
    for (needle, field) in FIELD_RULES {
        if lowered.contains(needle) {
            return Some(*field);
        }
    }
    None
}
