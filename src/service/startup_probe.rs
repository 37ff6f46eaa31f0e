use crate::api::GeminiClient;
use tracing::{info, warn};

/// Marker substring a catalog entry must contain to count as
/// generative-capable for this application.
const GENERATIVE_MARKER: &str = "gemini";

/// Outcome of the one-shot configuration probe.
///
/// A listing failure is deliberately swallowed here: it lands in
/// `diagnostic` instead of propagating, so the probe can never interrupt
/// startup.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub generative_available: bool,
    pub diagnostic: Option<String>,
}

/// Checks whether the configured credential can reach any generative model.
///
/// Best-effort diagnostic, run once at startup. The report is only ever
/// logged by the caller; subsequent functionality is not gated on it.
pub async fn run_startup_probe(client: &GeminiClient) -> ProbeReport {
    let list = match client.list_models().await {
        Ok(list) => list,
        Err(err) => {
            warn!(error = %err, "Gemini configuration check failed");
            return ProbeReport {
                generative_available: false,
                diagnostic: Some(err.to_string()),
            };
        }
    };

    let generative: Vec<&str> = list
        .models
        .iter()
        .map(|model| model.name.as_str())
        .filter(|name| name.contains(GENERATIVE_MARKER))
        .collect();

    if generative.is_empty() {
        warn!("No Gemini models found in available models");
        ProbeReport {
            generative_available: false,
            diagnostic: Some(format!(
                "catalog listed {} models, none matched \"{GENERATIVE_MARKER}\"",
                list.models.len()
            )),
        }
    } else {
        info!(models = %generative.join(", "), "Found Gemini models");
        ProbeReport {
            generative_available: true,
            diagnostic: None,
        }
    }
}
