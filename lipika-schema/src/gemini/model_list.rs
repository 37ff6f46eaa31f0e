use serde::{Deserialize, Serialize};

/// Model catalog response from `GET <base>/models`.
///
/// Provider order is preserved; no uniqueness is imposed on names.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GeminiModelList {
    #[serde(default)]
    pub models: Vec<GeminiModel>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiModel {
    /// Fully qualified catalog name, e.g. `models/gemini-pro`.
    pub name: String,
    pub version: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub input_token_limit: Option<u64>,
    pub output_token_limit: Option<u64>,
    pub supported_generation_methods: Option<Vec<String>>,
}
