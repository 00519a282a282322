//! AI usage metadata model
//!
//! Holds the token counts and model identifier pulled out of a step output

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token usage and model information extracted from a step output
///
/// Every field is optional: extraction is best effort and keeps whatever
/// scalar the payload stored under a recognized key, string or number alike.
/// Serialized in camelCase for the rendering side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiUsageInfo {
    /// Tokens consumed by the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<Value>,
    /// Tokens produced by the completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<Value>,
    /// Combined token count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<Value>,
    /// Model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
}

/// The four categories of AI metadata an output key can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageField {
    PromptTokens,
    CompletionTokens,
    TotalTokens,
    Model,
}

impl AiUsageInfo {
    /// Read a field slot
    pub fn get(&self, field: UsageField) -> Option<&Value> {
        match field {
            UsageField::PromptTokens => self.prompt_tokens.as_ref(),
            UsageField::CompletionTokens => self.completion_tokens.as_ref(),
            UsageField::TotalTokens => self.total_tokens.as_ref(),
            UsageField::Model => self.model.as_ref(),
        }
    }

    /// Fill a field slot only if it is still empty; the first write wins
    pub fn fill(&mut self, field: UsageField, value: Value) {
        let slot = match field {
            UsageField::PromptTokens => &mut self.prompt_tokens,
            UsageField::CompletionTokens => &mut self.completion_tokens,
            UsageField::TotalTokens => &mut self.total_tokens,
            UsageField::Model => &mut self.model,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    /// Whether every target field has been filled
    pub fn is_complete(&self) -> bool {
        self.prompt_tokens.is_some()
            && self.completion_tokens.is_some()
            && self.total_tokens.is_some()
            && self.model.is_some()
    }

    /// Whether no field has been filled
    pub fn is_empty(&self) -> bool {
        self.prompt_tokens.is_none()
            && self.completion_tokens.is_none()
            && self.total_tokens.is_none()
            && self.model.is_none()
    }
}
