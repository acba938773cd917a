use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::AnalysisOrchestrator;
use crate::domain::repositories::{job_registry::JobRegistryError, JobRegistry, JobTransition};

#[derive(Debug)]
pub enum StartAnalysisError {
    JobNotFound(Uuid),
    AlreadyStarted { job_id: Uuid, status: String },
    Registry(String),
}

impl std::fmt::Display for StartAnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartAnalysisError::JobNotFound(job_id) => write!(f, "Job not found: {}", job_id),
            StartAnalysisError::AlreadyStarted { status, .. } => {
                write!(f, "Job is already {}", status)
            }
            StartAnalysisError::Registry(msg) => write!(f, "Registry error: {}", msg),
        }
    }
}

impl std::error::Error for StartAnalysisError {}

impl From<JobRegistryError> for StartAnalysisError {
    fn from(error: JobRegistryError) -> Self {
        match error {
            JobRegistryError::NotFound(job_id) => StartAnalysisError::JobNotFound(job_id),
            JobRegistryError::Conflict { job_id, status } => StartAnalysisError::AlreadyStarted {
                job_id,
                status: status.to_string(),
            },
            JobRegistryError::ValidationError(msg) => StartAnalysisError::Registry(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StartAnalysisRequest {
    pub job_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct StartAnalysisResponse {
    pub job_id: Uuid,
    pub status: String,
    pub message: String,
}

pub struct StartAnalysisUseCase {
    job_registry: Arc<dyn JobRegistry>,
    orchestrator: Arc<AnalysisOrchestrator>,
}

impl StartAnalysisUseCase {
    pub fn new(
        job_registry: Arc<dyn JobRegistry>,
        orchestrator: Arc<AnalysisOrchestrator>,
    ) -> Self {
        Self {
            job_registry,
            orchestrator,
        }
    }

    /// Claims the job for processing and spawns the analysis in the
    /// background. The transition is the gate: a second caller loses the
    /// check-and-set and gets a conflict instead of a duplicate run.
    pub async fn execute(
        &self,
        request: StartAnalysisRequest,
    ) -> Result<StartAnalysisResponse, StartAnalysisError> {
        let job = self
            .job_registry
            .transition(request.job_id, JobTransition::Begin)
            .await?;

        let orchestrator = self.orchestrator.clone();
        let job_id = job.id();
        let text = job.text().to_string();
        let document_name = job.document_name().to_string();

        tokio::spawn(async move {
            orchestrator.run(job_id, text, document_name).await;
        });

        Ok(StartAnalysisResponse {
            job_id: job.id(),
            status: job.status().to_string(),
            message: "Analysis started".to_string(),
        })
    }
}
