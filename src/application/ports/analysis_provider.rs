use async_trait::async_trait;

use crate::domain::value_objects::{EntitySet, Sentiment};

/// The three remote analysis routines a job fans out to. The display names
/// are the labels used in a job's `agent_failures` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Summarizer,
    EntityExtractor,
    SentimentAnalyzer,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Summarizer => "Summarizer",
            Capability::EntityExtractor => "Entity Extractor",
            Capability::SentimentAnalyzer => "Sentiment Analyzer",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug)]
pub enum ModelError {
    NetworkError(String),
    ApiError(String),
    ParseError(String),
    EmptyResponse,
    Timeout(u64),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ModelError::ApiError(msg) => write!(f, "API error: {}", msg),
            ModelError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ModelError::EmptyResponse => write!(f, "Empty response from model"),
            ModelError::Timeout(secs) => write!(f, "Timed out after {}s", secs),
        }
    }
}

impl std::error::Error for ModelError {}

#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, ModelError>;

    async fn extract_entities(&self, text: &str) -> Result<EntitySet, ModelError>;

    async fn analyze_sentiment(&self, text: &str) -> Result<Sentiment, ModelError>;
}
