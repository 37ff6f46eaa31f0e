use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Gemini API error response envelope.
///
/// Decoding is best effort: every field is optional and unknown fields are
/// preserved, so a partially structured body still yields something usable
/// for diagnostics.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiErrorBody {
    #[serde(rename = "error")]
    pub inner: GeminiErrorObject,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiErrorObject {
    /// Numeric error code returned by upstream (often equals the HTTP status
    /// code, e.g. `429`/`404`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    /// Human-readable error message from upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Upstream status string (Google-style canonical status name), e.g.
    /// `"RESOURCE_EXHAUSTED"` or `"NOT_FOUND"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Catch-all for any additional fields inside the upstream `error`
    /// object, preserved for internal logs.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}
