pub mod gemini;

pub use gemini::{
    Candidate, Content, GeminiErrorBody, GeminiErrorObject, GeminiModel, GeminiModelList,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
