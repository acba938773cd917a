use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::application::ports::analysis_provider::{AnalysisProvider, Capability, ModelError};
use crate::domain::entities::AnalysisResults;
use crate::domain::repositories::job_registry::{JobRegistry, JobTransition};
use crate::domain::value_objects::{EntitySet, Sentiment};

const DEFAULT_CAPABILITY_TIMEOUT_SECS: u64 = 120;

/// Substituted when the summarizer fails and the other capabilities still
/// produce usable output.
const SUMMARY_FALLBACK: &str = "Summary unavailable due to agent failure";

#[derive(Debug)]
pub enum OrchestrationError {
    CapabilityPanicked(Vec<Capability>),
    RegistryError(String),
}

impl std::fmt::Display for OrchestrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestrationError::CapabilityPanicked(capabilities) => {
                let names: Vec<&str> = capabilities.iter().map(|c| c.name()).collect();
                write!(f, "Analysis task crashed: {}", names.join(", "))
            }
            OrchestrationError::RegistryError(msg) => write!(f, "Registry error: {}", msg),
        }
    }
}

impl std::error::Error for OrchestrationError {}

/// Fans one document out to the three analysis capabilities, gathers their
/// results, and records the outcome on the job. A capability that fails or
/// times out is replaced by its fallback value and noted in the job's
/// `agent_failures`; only a crashed task or a registry error fails the job.
pub struct AnalysisOrchestrator {
    job_registry: Arc<dyn JobRegistry>,
    analysis_provider: Arc<dyn AnalysisProvider>,
    capability_timeout: Duration,
}

impl AnalysisOrchestrator {
    pub fn new(
        job_registry: Arc<dyn JobRegistry>,
        analysis_provider: Arc<dyn AnalysisProvider>,
    ) -> Self {
        Self {
            job_registry,
            analysis_provider,
            capability_timeout: Duration::from_secs(DEFAULT_CAPABILITY_TIMEOUT_SECS),
        }
    }

    pub fn with_capability_timeout(mut self, timeout: Duration) -> Self {
        self.capability_timeout = timeout;
        self
    }

    /// Runs the full analysis for a job already in the processing state.
    /// Always drives the job to a terminal status; errors are recorded on
    /// the job rather than returned.
    pub async fn run(&self, job_id: Uuid, text: String, document_name: String) {
        let started = Instant::now();
        tracing::info!(
            "Starting analysis for job {} (document: {})",
            job_id,
            document_name
        );

        let timeout = self.capability_timeout;

        let provider = self.analysis_provider.clone();
        let summary_text = text.clone();
        let summary_task = tokio::spawn(async move {
            run_capability(timeout, provider.summarize(&summary_text)).await
        });

        let provider = self.analysis_provider.clone();
        let entity_text = text.clone();
        let entities_task = tokio::spawn(async move {
            run_capability(timeout, provider.extract_entities(&entity_text)).await
        });

        let provider = self.analysis_provider.clone();
        let sentiment_task = tokio::spawn(async move {
            run_capability(timeout, provider.analyze_sentiment(&text)).await
        });

        let (summary_join, entities_join, sentiment_join) =
            futures::future::join3(summary_task, entities_task, sentiment_task).await;

        let (summary_result, entities_result, sentiment_result) =
            match (summary_join, entities_join, sentiment_join) {
                (Ok(summary), Ok(entities), Ok(sentiment)) => (summary, entities, sentiment),
                (summary, entities, sentiment) => {
                    let mut crashed = Vec::new();
                    if summary.is_err() {
                        crashed.push(Capability::Summarizer);
                    }
                    if entities.is_err() {
                        crashed.push(Capability::EntityExtractor);
                    }
                    if sentiment.is_err() {
                        crashed.push(Capability::SentimentAnalyzer);
                    }

                    let error = OrchestrationError::CapabilityPanicked(crashed);
                    tracing::error!("Job {} failed: {}", job_id, error);
                    self.fail_job(job_id, error.to_string(), started.elapsed())
                        .await;
                    return;
                }
            };

        // Failure ordering matches the fan-out order above.
        let mut agent_failures = Vec::new();

        let summary = match summary_result {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Job {}: {} failed: {}", job_id, Capability::Summarizer, e);
                agent_failures.push(format!("{}: {}", Capability::Summarizer, e));
                SUMMARY_FALLBACK.to_string()
            }
        };

        let entities = match entities_result {
            Ok(entities) => entities,
            Err(e) => {
                tracing::warn!(
                    "Job {}: {} failed: {}",
                    job_id,
                    Capability::EntityExtractor,
                    e
                );
                agent_failures.push(format!("{}: {}", Capability::EntityExtractor, e));
                EntitySet::default()
            }
        };

        let sentiment = match sentiment_result {
            Ok(sentiment) => sentiment,
            Err(e) => {
                tracing::warn!(
                    "Job {}: {} failed: {}",
                    job_id,
                    Capability::SentimentAnalyzer,
                    e
                );
                agent_failures.push(format!("{}: {}", Capability::SentimentAnalyzer, e));
                Sentiment::fallback()
            }
        };

        let processing_time_seconds = round_to_hundredths(started.elapsed().as_secs_f64());
        let results = AnalysisResults {
            summary,
            entities,
            sentiment,
        };
        let failure_count = agent_failures.len();

        let transition = JobTransition::Complete {
            results,
            agent_failures,
            processing_time_seconds,
        };

        match self.job_registry.transition(job_id, transition).await {
            Ok(_) => {
                tracing::info!(
                    "Job {} completed in {:.2}s ({} agent failures)",
                    job_id,
                    processing_time_seconds,
                    failure_count
                );
            }
            Err(e) => {
                let error = OrchestrationError::RegistryError(e.to_string());
                tracing::error!("Job {} could not record results: {}", job_id, error);
                self.fail_job(job_id, error.to_string(), started.elapsed())
                    .await;
            }
        }
    }

    async fn fail_job(&self, job_id: Uuid, error: String, elapsed: Duration) {
        let transition = JobTransition::Fail {
            error,
            processing_time_seconds: round_to_hundredths(elapsed.as_secs_f64()),
        };

        if let Err(e) = self.job_registry.transition(job_id, transition).await {
            tracing::error!("Failed to record failure for job {}: {}", job_id, e);
        }
    }
}

async fn run_capability<T>(
    timeout: Duration,
    task: impl Future<Output = Result<T, ModelError>>,
) -> Result<T, ModelError> {
    match tokio::time::timeout(timeout, task).await {
        Ok(result) => result,
        Err(_) => Err(ModelError::Timeout(timeout.as_secs())),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
