//! Typed request schema for the Gemini `generateContent` endpoints.
//!
//! Instead of assembling raw `serde_json::Value` bodies at call sites, the
//! request is a properly typed struct. This gives us:
//! - Compile-time access to known fields.
//! - Forward compatibility via `extra` catch-all maps at every level.
//! - A single constructor for the common single-turn prompt shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Gemini `generateContent` request body.
///
/// Reference: <https://ai.google.dev/gemini-api/docs/text-generation>
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Required conversation turns.
    pub contents: Vec<Content>,

    /// Generation parameters (temperature, maxOutputTokens, …).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,

    /// Catch-all for optional fields not set by this application, including
    /// `safetySettings` and `systemInstruction`.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GenerateContentRequest {
    /// Builds the single-turn shape: one user content holding one text part.
    pub fn from_prompt(prompt: impl Into<String>, temperature: f64, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.into()),
                    ..Default::default()
                }],
                extra: BTreeMap::new(),
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(temperature),
                max_output_tokens: Some(max_output_tokens),
                extra: BTreeMap::new(),
            }),
            extra: BTreeMap::new(),
        }
    }
}

/// A single conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Usually `"user"` or `"model"`. Kept as raw string for transparent
    /// pass-through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ordered parts that constitute a single message.
    #[serde(default)]
    pub parts: Vec<Part>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One atomic piece of content inside a `Content` turn.
///
/// `text` is the only variant this application produces; other part types
/// (inlineData, functionCall, …) land in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// `generationConfig` object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}
