use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Sampling knobs exposed to callers. Everything else about the request is
/// fixed by the client.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_retries: u32,
    pub timeout_secs: u64,
    pub backoff_factor: f64,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        let api_key = env::var("GOOGLE_API_KEY").unwrap_or_default();
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            api_key,
            model,
            base_url,
            max_retries: 3,
            timeout_secs: 30,
            backoff_factor: 1.5,
        }
    }
}

#[derive(Debug)]
pub enum GeminiError {
    RequestError(String),
    ApiError(String),
    ParseError(String),
    EmptyResponse,
    MaxRetriesExceeded(String),
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        Self::new(GeminiClientConfig::default())
    }

    pub async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
            }),
        };

        let response = self.send_request(&request).await?;

        response_text(&response)
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    async fn send_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let mut attempts = 0;
        let mut last_error = None;

        loop {
            attempts += 1;

            match self.execute_request(request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    last_error = Some(e);

                    if attempts > self.config.max_retries {
                        break;
                    }

                    let backoff_time = Duration::from_millis(
                        (self.config.backoff_factor.powi(attempts as i32 - 1) * 1000.0) as u64,
                    );

                    tokio::time::sleep(backoff_time).await;
                }
            }
        }

        Err(last_error.unwrap_or(GeminiError::MaxRetriesExceeded(
            "Max retries exceeded".to_string(),
        )))
    }

    async fn execute_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response = self
            .client
            .post(self.endpoint_url())
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::RequestError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::ParseError(e.to_string()))
    }
}

fn response_text(payload: &GenerateContentResponse) -> Result<String, GeminiError> {
    let text = payload
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GeminiError::EmptyResponse);
    }

    Ok(trimmed.to_string())
}
