mod error_body;
mod generate_content;
mod model_list;
mod response;

pub use error_body::{GeminiErrorBody, GeminiErrorObject};
pub use generate_content::{Content, GenerateContentRequest, GenerationConfig, Part};
pub use model_list::{GeminiModel, GeminiModelList};
pub use response::{Candidate, GenerateContentResponse};
