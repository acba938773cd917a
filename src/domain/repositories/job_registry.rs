use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{AnalysisJob, AnalysisResults};
use crate::domain::value_objects::JobStatus;

#[derive(Debug)]
pub enum JobRegistryError {
    NotFound(Uuid),
    ValidationError(String),
    Conflict { job_id: Uuid, status: JobStatus },
}

impl std::fmt::Display for JobRegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobRegistryError::NotFound(id) => write!(f, "Job not found: {}", id),
            JobRegistryError::ValidationError(msg) => write!(f, "{}", msg),
            JobRegistryError::Conflict { job_id, status } => {
                write!(f, "Job {} is already {}", job_id, status)
            }
        }
    }
}

impl std::error::Error for JobRegistryError {}

/// A requested state change, carrying the payload that state demands.
/// Combining the status check and the write into one registry call is what
/// keeps `uploaded -> processing` a check-and-set rather than a racy
/// read-then-write.
#[derive(Debug, Clone)]
pub enum JobTransition {
    Begin,
    Complete {
        results: AnalysisResults,
        agent_failures: Vec<String>,
        processing_time_seconds: f64,
    },
    Fail {
        error: String,
        processing_time_seconds: f64,
    },
}

#[async_trait]
pub trait JobRegistry: Send + Sync {
    /// Validates the extracted text and stores a fresh `uploaded` job.
    async fn create(
        &self,
        document_name: String,
        text: String,
    ) -> Result<AnalysisJob, JobRegistryError>;

    async fn get(&self, job_id: Uuid) -> Result<AnalysisJob, JobRegistryError>;

    /// Applies a state transition atomically and returns the updated job.
    /// A transition the current status does not allow fails with `Conflict`.
    async fn transition(
        &self,
        job_id: Uuid,
        transition: JobTransition,
    ) -> Result<AnalysisJob, JobRegistryError>;
}
