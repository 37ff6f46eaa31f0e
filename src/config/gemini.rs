use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable holding the Gemini API credential.
///
/// Read from the process environment (never from config.toml) so the secret
/// stays out of checked-in files.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Gemini upstream configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Base URL of the model catalog API.
    /// TOML: `gemini.catalog_base`.
    #[serde(default = "default_catalog_base")]
    pub catalog_base: Url,

    /// Ordered completion endpoint candidates. Tried strictly in this order
    /// on every call; the first success wins.
    /// TOML: `gemini.endpoints`.
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<Url>,

    /// Sampling temperature sent with every completion request.
    /// TOML: `gemini.temperature`. Default: `0.7`.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum output token count sent with every completion request.
    /// TOML: `gemini.max_output_tokens`. Default: `2048`.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            catalog_base: default_catalog_base(),
            endpoints: default_endpoints(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// Reads the Gemini API key from the process environment.
///
/// Empty or whitespace-only values count as unset. Callers decide whether a
/// missing key is fatal; dependent operations fail before any network I/O.
pub fn gemini_api_key() -> Option<String> {
    std::env::var(GEMINI_API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

fn default_catalog_base() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1").expect("valid catalog base url")
}

/// Completion endpoint candidates: alternate model aliases and API versions.
/// The order is deliberate and must be preserved.
fn default_endpoints() -> Vec<Url> {
    [
        "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent",
        "https://generativelanguage.googleapis.com/v1/models/gemini-1.5-pro:generateContent",
        "https://generativelanguage.googleapis.com/v1/models/gemini-1.0-pro:generateContent",
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
    ]
    .into_iter()
    .map(|endpoint| Url::parse(endpoint).expect("valid default endpoint url"))
    .collect()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    2048
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_order_is_fixed() {
        let endpoints = default_endpoints();
        assert_eq!(endpoints.len(), 4);
        assert!(endpoints[0].path().contains("/v1/models/gemini-pro:"));
        assert!(endpoints[1].path().contains("gemini-1.5-pro"));
        assert!(endpoints[2].path().contains("gemini-1.0-pro"));
        assert!(endpoints[3].path().starts_with("/v1beta/"));
    }
}
