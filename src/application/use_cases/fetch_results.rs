use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::AnalysisJob;
use crate::domain::repositories::{job_registry::JobRegistryError, JobRegistry};

#[derive(Debug)]
pub enum FetchResultsError {
    JobNotFound(Uuid),
    Registry(String),
}

impl std::fmt::Display for FetchResultsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchResultsError::JobNotFound(id) => write!(f, "Job not found: {}", id),
            FetchResultsError::Registry(msg) => write!(f, "Registry error: {}", msg),
        }
    }
}

impl std::error::Error for FetchResultsError {}

impl From<JobRegistryError> for FetchResultsError {
    fn from(error: JobRegistryError) -> Self {
        match error {
            JobRegistryError::NotFound(id) => FetchResultsError::JobNotFound(id),
            _ => FetchResultsError::Registry(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchResultsRequest {
    pub job_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct FetchResultsResponse {
    pub job: AnalysisJob,
}

pub struct FetchResultsUseCase {
    job_registry: Arc<dyn JobRegistry>,
}

impl FetchResultsUseCase {
    pub fn new(job_registry: Arc<dyn JobRegistry>) -> Self {
        Self { job_registry }
    }

    pub async fn execute(
        &self,
        request: FetchResultsRequest,
    ) -> Result<FetchResultsResponse, FetchResultsError> {
        let job = self.job_registry.get(request.job_id).await?;

        Ok(FetchResultsResponse { job })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::JobStatus;
    use crate::infrastructure::memory::InMemoryJobRegistry;

    #[tokio::test]
    async fn test_fetch_existing_job() {
        let registry = Arc::new(InMemoryJobRegistry::new());
        let job = registry
            .create(
                "notes.txt".to_string(),
                "Meeting notes from the planning session.".to_string(),
            )
            .await
            .unwrap();
        let use_case = FetchResultsUseCase::new(registry);

        let response = use_case
            .execute(FetchResultsRequest { job_id: job.id() })
            .await
            .unwrap();

        assert_eq!(response.job.id(), job.id());
        assert_eq!(response.job.status(), &JobStatus::Uploaded);
    }

    #[tokio::test]
    async fn test_fetch_unknown_job() {
        let registry = Arc::new(InMemoryJobRegistry::new());
        let use_case = FetchResultsUseCase::new(registry);
        let missing = Uuid::new_v4();

        let result = use_case
            .execute(FetchResultsRequest { job_id: missing })
            .await;

        match result {
            Err(FetchResultsError::JobNotFound(id)) => assert_eq!(id, missing),
            other => panic!("Expected JobNotFound, got {:?}", other),
        }
    }
}
