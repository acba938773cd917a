pub mod document_extractors;
pub mod gemini_agents;
pub mod gemini_client;
pub mod model_output;

pub use gemini_agents::GeminiAnalysisProvider;
