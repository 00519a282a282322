//! Step output classification model
//!
//! Distinguishes AI step output from ordinary function output

use serde_json::{Map, Value};

/// Marker field set by OpenAI-style outputs
pub const MODEL_FIELD: &str = "model";

/// Marker field set by Vercel AI SDK outputs
pub const PROVIDER_METADATA_FIELD: &str = "experimental_providerMetadata";

/// Classification of a single step output payload
///
/// The AI variants carry the full parsed object so callers can hand it
/// straight to the usage extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum AiClassification {
    /// Object output with a truthy top-level `model` field
    ModelOutput(Map<String, Value>),
    /// Object output with truthy provider metadata
    ProviderMetadataOutput(Map<String, Value>),
    /// Anything else, including malformed JSON and non-object roots
    NotAiOutput,
}

impl AiClassification {
    /// Whether the payload was recognized as AI output
    pub fn is_ai_output(&self) -> bool {
        !matches!(self, AiClassification::NotAiOutput)
    }

    /// The parsed output object, when the payload was recognized
    pub fn output(&self) -> Option<&Map<String, Value>> {
        match self {
            AiClassification::ModelOutput(obj) | AiClassification::ProviderMetadataOutput(obj) => {
                Some(obj)
            }
            AiClassification::NotAiOutput => None,
        }
    }

    /// Consume the classification and return the parsed output object
    pub fn into_output(self) -> Option<Map<String, Value>> {
        match self {
            AiClassification::ModelOutput(obj) | AiClassification::ProviderMetadataOutput(obj) => {
                Some(obj)
            }
            AiClassification::NotAiOutput => None,
        }
    }

    /// The `model` marker value, for model-flavored outputs
    pub fn model(&self) -> Option<&Value> {
        match self {
            AiClassification::ModelOutput(obj) => obj.get(MODEL_FIELD),
            _ => None,
        }
    }

    /// The provider metadata value, for metadata-flavored outputs
    pub fn provider_metadata(&self) -> Option<&Value> {
        match self {
            AiClassification::ProviderMetadataOutput(obj) => obj.get(PROVIDER_METADATA_FIELD),
            _ => None,
        }
    }
}
