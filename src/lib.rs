pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod service;

pub use api::GeminiClient;
pub use error::{GeminiError, UploadError};
