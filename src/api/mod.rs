mod gemini_client;

pub use gemini_client::GeminiClient;

/// How much of a raw upstream body to keep when logging diagnostics.
pub(crate) const UPSTREAM_BODY_PREVIEW_CHARS: usize = 300;
