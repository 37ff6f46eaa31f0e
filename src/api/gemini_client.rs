use crate::config::GeminiConfig;
use crate::error::GeminiError;
use lipika_schema::gemini::{
    GeminiErrorBody, GeminiErrorObject, GeminiModelList, GenerateContentRequest,
    GenerateContentResponse,
};
use tracing::{debug, info, warn};
use url::Url;

use super::UPSTREAM_BODY_PREVIEW_CHARS;

/// Thin client for the Gemini generative-language API.
///
/// Holds the shared HTTP client, the catalog URL, the ordered completion
/// endpoint candidates and the credential. All values are constructor
/// inputs; nothing is read from ambient state at call time.
pub struct GeminiClient {
    http: reqwest::Client,
    models_url: Url,
    endpoints: Vec<Url>,
    temperature: f64,
    max_output_tokens: u32,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, cfg: &GeminiConfig, api_key: Option<String>) -> Self {
        Self {
            http,
            models_url: catalog_models_url(&cfg.catalog_base),
            endpoints: cfg.endpoints.clone(),
            temperature: cfg.temperature,
            max_output_tokens: cfg.max_output_tokens,
            api_key,
        }
    }

    /// The credential, or a configuration error raised before any network
    /// I/O. Fails closed: a blank key counts as absent.
    fn api_key(&self) -> Result<&str, GeminiError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GeminiError::MissingApiKey)
    }

    /// Fetches the model catalog.
    ///
    /// A single GET against the catalog endpoint; no retry, no fallback. A
    /// non-success status fails with the status code and whatever error body
    /// could be decoded.
    pub async fn list_models(&self) -> Result<GeminiModelList, GeminiError> {
        let key = self.api_key()?;

        let resp = self
            .http
            .get(with_key_query(&self.models_url, key))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = decode_error_body(resp).await;
            warn!(%status, body = ?body, "Model catalog request failed");
            return Err(GeminiError::UpstreamStatus { status, body });
        }

        let bytes = resp.bytes().await?;
        let list: GeminiModelList = serde_json::from_slice(&bytes)?;
        debug_pretty_json("Model catalog", &list);
        Ok(list)
    }

    /// Generates a completion for `prompt`, falling back across the
    /// configured endpoint candidates.
    ///
    /// Candidates are tried strictly sequentially in declared order. A
    /// transport failure or non-success status is recorded and the next
    /// candidate is tried; a success body with zero candidates is skipped
    /// without recording an error. The first candidate that yields text
    /// terminates the loop. When all candidates are exhausted the last
    /// recorded error surfaces, or [`GeminiError::Exhausted`] if none was.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let key = self.api_key()?;

        let body =
            GenerateContentRequest::from_prompt(prompt, self.temperature, self.max_output_tokens);

        let mut last_error: Option<GeminiError> = None;

        for endpoint in &self.endpoints {
            debug!(endpoint = %endpoint, "Trying Gemini endpoint");

            let resp = match self
                .http
                .post(with_key_query(endpoint, key))
                .json(&body)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(err) => {
                    warn!(endpoint = %endpoint, error = %err, "Gemini endpoint unreachable");
                    last_error = Some(GeminiError::Transport(err));
                    continue;
                }
            };

            if !resp.status().is_success() {
                let status = resp.status();
                let error_body = decode_error_body(resp).await;
                warn!(
                    endpoint = %endpoint,
                    %status,
                    body = ?error_body,
                    "Gemini endpoint rejected the request"
                );
                last_error = Some(GeminiError::UpstreamStatus {
                    status,
                    body: error_body,
                });
                continue;
            }

            let bytes = match resp.bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(endpoint = %endpoint, error = %err, "Failed to read Gemini response body");
                    last_error = Some(GeminiError::Transport(err));
                    continue;
                }
            };

            let decoded: GenerateContentResponse = match serde_json::from_slice(&bytes) {
                Ok(decoded) => decoded,
                Err(err) => {
                    warn!(endpoint = %endpoint, error = %err, "Gemini response body did not parse");
                    last_error = Some(GeminiError::Decode(err));
                    continue;
                }
            };

            // Zero candidates means "no usable output", not a hard failure.
            match decoded.first_text() {
                Some(text) => {
                    info!(endpoint = %endpoint, "Gemini endpoint succeeded");
                    return Ok(text.to_string());
                }
                None => {
                    debug!(endpoint = %endpoint, "Gemini endpoint returned no candidates");
                    continue;
                }
            }
        }

        warn!("All Gemini endpoints failed");
        Err(last_error.unwrap_or(GeminiError::Exhausted))
    }
}

/// `<catalog_base>/models`.
fn catalog_models_url(base: &Url) -> Url {
    let mut url = base.clone();
    let path = format!("{}/models", url.path().trim_end_matches('/'));
    url.set_path(&path);
    url
}

/// Appends the credential as the `key` query parameter.
fn with_key_query(url: &Url, key: &str) -> Url {
    let mut url = url.clone();
    url.query_pairs_mut().append_pair("key", key);
    url
}

/// Best-effort decode of an upstream error body.
///
/// Failure to read or decode the body is tolerated and yields `None`; the
/// raw body is previewed at debug level for diagnostics.
async fn decode_error_body(resp: reqwest::Response) -> Option<GeminiErrorObject> {
    let bytes = resp.bytes().await.ok()?;
    match serde_json::from_slice::<GeminiErrorBody>(&bytes) {
        Ok(body) => Some(body.inner),
        Err(_) => {
            let raw = String::from_utf8_lossy(&bytes);
            debug!(
                body = %format!("{:.len$}", raw, len = UPSTREAM_BODY_PREVIEW_CHARS),
                "Upstream error body was not structured"
            );
            None
        }
    }
}

/// Logs `value` as pretty JSON, skipping serialization entirely below debug.
fn debug_pretty_json<T: serde::Serialize>(label: &str, value: &T) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>"));
    debug!("{label}:\n{pretty}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_url_joins_base_path() {
        let base = Url::parse("https://generativelanguage.googleapis.com/v1").unwrap();
        assert_eq!(
            catalog_models_url(&base).as_str(),
            "https://generativelanguage.googleapis.com/v1/models"
        );

        let trailing = Url::parse("https://example.com/v1/").unwrap();
        assert_eq!(
            catalog_models_url(&trailing).as_str(),
            "https://example.com/v1/models"
        );
    }

    #[test]
    fn key_query_is_appended() {
        let url = Url::parse("https://example.com/v1/models/gemini-pro:generateContent").unwrap();
        let with_key = with_key_query(&url, "secret");
        assert_eq!(with_key.query(), Some("key=secret"));
        // The original is untouched.
        assert!(url.query().is_none());
    }
}
