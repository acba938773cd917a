use async_trait::async_trait;
use reqwest::Error as ReqwestError;
use serde::Deserialize;

use crate::application::ports::analysis_provider::{AnalysisProvider, ModelError};
use crate::domain::value_objects::{EntitySet, Sentiment, Tone};
use crate::infrastructure::external_services::gemini_client::{
    GeminiClient, GeminiError, GenerationOptions,
};
use crate::infrastructure::external_services::model_output;

/// Documents are cut to this many characters before prompting.
const MAX_DOCUMENT_CHARS: usize = 4000;

const SUMMARY_TEMPERATURE: f32 = 0.3;
const SUMMARY_MAX_OUTPUT_TOKENS: u32 = 2000;
const STRUCTURED_TEMPERATURE: f32 = 0.1;

/// Reported when the model answers but leaves the confidence score out.
const DEFAULT_CONFIDENCE: f64 = 0.5;

const SUMMARY_PROMPT: &str = r#"Create a concise summary of the following document in maximum 150 words.
Focus on key points and main ideas.

Document:
{document}"#;

const ENTITY_PROMPT: &str = r#"Extract the following entities from the text:
- People (names of individuals)
- Organizations (companies, institutions)
- Dates (specific dates mentioned)
- Locations (cities, countries, places)

Return ONLY a JSON object with these exact keys: people, organizations, dates, locations.
Each value should be a list of strings. If no entities found for a category, return an empty list.

Document:
{document}

Response (JSON only):"#;

const SENTIMENT_PROMPT: &str = r#"Analyze the sentiment/tone of the following document and determine if it's positive, negative, or neutral.
Also provide a confidence score between 0 and 1.

Return ONLY a JSON object with these exact keys:
- tone: one of "positive", "negative", or "neutral"
- confidence: a float between 0 and 1

Document:
{document}

Response (JSON only):"#;

/// Adapter that backs all three analysis capabilities with Gemini.
pub struct GeminiAnalysisProvider {
    client: GeminiClient,
}

impl GeminiAnalysisProvider {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        let client = GeminiClient::from_env()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AnalysisProvider for GeminiAnalysisProvider {
    async fn summarize(&self, text: &str) -> Result<String, ModelError> {
        let prompt = SUMMARY_PROMPT.replace("{document}", truncate_document(text));
        let options = GenerationOptions {
            temperature: SUMMARY_TEMPERATURE,
            max_output_tokens: Some(SUMMARY_MAX_OUTPUT_TOKENS),
        };

        self.client
            .generate(&prompt, &options)
            .await
            .map_err(map_gemini_error)
    }

    async fn extract_entities(&self, text: &str) -> Result<EntitySet, ModelError> {
        let prompt = ENTITY_PROMPT.replace("{document}", truncate_document(text));
        let options = GenerationOptions {
            temperature: STRUCTURED_TEMPERATURE,
            max_output_tokens: None,
        };

        let response = self
            .client
            .generate(&prompt, &options)
            .await
            .map_err(map_gemini_error)?;

        parse_entities(&response)
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<Sentiment, ModelError> {
        let prompt = SENTIMENT_PROMPT.replace("{document}", truncate_document(text));
        let options = GenerationOptions {
            temperature: STRUCTURED_TEMPERATURE,
            max_output_tokens: None,
        };

        let response = self
            .client
            .generate(&prompt, &options)
            .await
            .map_err(map_gemini_error)?;

        parse_sentiment(&response)
    }
}

fn truncate_document(text: &str) -> &str {
    match text.char_indices().nth(MAX_DOCUMENT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn map_gemini_error(error: GeminiError) -> ModelError {
    match error {
        GeminiError::RequestError(msg) => ModelError::NetworkError(msg),
        GeminiError::ApiError(msg) => ModelError::ApiError(msg),
        GeminiError::ParseError(msg) => ModelError::ParseError(msg),
        GeminiError::EmptyResponse => ModelError::EmptyResponse,
        GeminiError::MaxRetriesExceeded(msg) => ModelError::NetworkError(msg),
    }
}

#[derive(Debug, Deserialize)]
struct RawSentiment {
    tone: Option<String>,
    confidence: Option<f64>,
}

fn parse_entities(raw: &str) -> Result<EntitySet, ModelError> {
    model_output::extract_json(raw).map_err(|e| ModelError::ParseError(e.to_string()))
}

fn parse_sentiment(raw: &str) -> Result<Sentiment, ModelError> {
    let parsed: RawSentiment =
        model_output::extract_json(raw).map_err(|e| ModelError::ParseError(e.to_string()))?;

    let tone = parsed
        .tone
        .as_deref()
        .and_then(Tone::from_label)
        .unwrap_or(Tone::Neutral);
    let confidence = parsed.confidence.unwrap_or(DEFAULT_CONFIDENCE);

    Ok(Sentiment::new(tone, confidence))
}
