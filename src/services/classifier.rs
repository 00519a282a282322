//! Step output classifier
//!
//! Decides whether a raw step output payload came from an AI call. This is a
//! heuristic gate keyed on marker fields until first-class AI step indicators
//! exist, not a schema validator.

use serde_json::Value;
use tracing::warn;

use crate::models::classification::{AiClassification, MODEL_FIELD, PROVIDER_METADATA_FIELD};
use crate::utils::error::InspectResult;
use crate::utils::logging::truncate_payload;

/// Longest payload echo attached to a parse failure diagnostic
const MAX_DIAGNOSTIC_PAYLOAD: usize = 120;

/// Classify raw step output, treating malformed JSON as non-AI output
///
/// Parse failures are logged and recovered here; callers never see them.
pub fn classify_output(raw: &str) -> AiClassification {
    match try_classify_output(raw) {
        Ok(classification) => classification,
        Err(err) => {
            warn!(
                error = %err,
                payload = %truncate_payload(raw, MAX_DIAGNOSTIC_PAYLOAD),
                "Unable to parse step output as JSON"
            );
            AiClassification::NotAiOutput
        }
    }
}

/// Classify raw step output, propagating the JSON parse failure
pub fn try_classify_output(raw: &str) -> InspectResult<AiClassification> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(classify_value(value))
}

/// Classify an already-parsed output value
///
/// The `model` marker is checked first; an output carrying both markers
/// classifies as a model output.
pub fn classify_value(value: Value) -> AiClassification {
    let obj = match value {
        Value::Object(obj) => obj,
        _ => return AiClassification::NotAiOutput,
    };

    if obj.get(MODEL_FIELD).is_some_and(is_truthy) {
        return AiClassification::ModelOutput(obj);
    }
    if obj.get(PROVIDER_METADATA_FIELD).is_some_and(is_truthy) {
        return AiClassification::ProviderMetadataOutput(obj);
    }
    AiClassification::NotAiOutput
}

/// JavaScript-style truthiness for JSON values
///
/// `null`, `false`, `0` and `""` are falsy; arrays and objects are always
/// truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_table() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("gpt-4")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_model_marker_takes_precedence() {
        let value = json!({
            "model": "gpt-4o",
            "experimental_providerMetadata": {"openai": {}}
        });

        match classify_value(value) {
            AiClassification::ModelOutput(obj) => {
                assert_eq!(obj.get("model"), Some(&json!("gpt-4o")));
            }
            other => panic!("expected model output, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_roots_rejected() {
        assert_eq!(classify_value(json!([1, 2, 3])), AiClassification::NotAiOutput);
        assert_eq!(classify_value(json!("model")), AiClassification::NotAiOutput);
        assert_eq!(classify_value(json!(42)), AiClassification::NotAiOutput);
        assert_eq!(classify_value(json!(null)), AiClassification::NotAiOutput);
    }
}
