use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::AnalysisJob;
use crate::domain::repositories::job_registry::{JobRegistry, JobRegistryError, JobTransition};

/// Volatile job store. The whole read-check-write of a transition happens
/// under one write-lock acquisition, so two concurrent `Begin` calls for the
/// same job cannot both pass the status check.
pub struct InMemoryJobRegistry {
    jobs: RwLock<HashMap<Uuid, AnalysisJob>>,
}

impl InMemoryJobRegistry {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }

    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }
}

impl Default for InMemoryJobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRegistry for InMemoryJobRegistry {
    async fn create(
        &self,
        document_name: String,
        text: String,
    ) -> Result<AnalysisJob, JobRegistryError> {
        let job =
            AnalysisJob::new(document_name, text).map_err(JobRegistryError::ValidationError)?;

        let mut jobs = self.jobs.write().await;
        jobs.insert(job.id(), job.clone());

        Ok(job)
    }

    async fn get(&self, job_id: Uuid) -> Result<AnalysisJob, JobRegistryError> {
        let jobs = self.jobs.read().await;
        jobs.get(&job_id)
            .cloned()
            .ok_or(JobRegistryError::NotFound(job_id))
    }

    async fn transition(
        &self,
        job_id: Uuid,
        transition: JobTransition,
    ) -> Result<AnalysisJob, JobRegistryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&job_id)
            .ok_or(JobRegistryError::NotFound(job_id))?;

        let applied = match transition {
            JobTransition::Begin => job.start_processing(),
            JobTransition::Complete {
                results,
                agent_failures,
                processing_time_seconds,
            } => job.complete(results, agent_failures, processing_time_seconds),
            JobTransition::Fail {
                error,
                processing_time_seconds,
            } => job.fail(error, processing_time_seconds),
        };

        match applied {
            Ok(()) => Ok(job.clone()),
            Err(_) => Err(JobRegistryError::Conflict {
                job_id,
                status: *job.status(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AnalysisResults;
    use crate::domain::value_objects::{EntitySet, JobStatus, Sentiment, Tone};
    use std::sync::Arc;

    const SAMPLE_TEXT: &str = "The committee approved the budget on March 3rd.";

    fn sample_results() -> AnalysisResults {
        AnalysisResults {
            summary: "Budget approved.".to_string(),
            entities: EntitySet::default(),
            sentiment: Sentiment::new(Tone::Positive, 0.7),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let registry = InMemoryJobRegistry::new();

        let job = registry
            .create("minutes.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();

        let fetched = registry.get(job.id()).await.unwrap();
        assert_eq!(fetched, job);
        assert_eq!(fetched.status(), &JobStatus::Uploaded);
        assert_eq!(registry.job_count().await, 1);
    }

    #[tokio::test]
    async fn test_create_generates_unique_ids() {
        let registry = InMemoryJobRegistry::new();

        let first = registry
            .create("a.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();
        let second = registry
            .create("b.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(registry.job_count().await, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_short_text() {
        let registry = InMemoryJobRegistry::new();

        let result = registry
            .create("tiny.txt".to_string(), "short".to_string())
            .await;

        assert!(matches!(
            result,
            Err(JobRegistryError::ValidationError(_))
        ));
        assert_eq!(registry.job_count().await, 0);
    }

    #[tokio::test]
    async fn test_get_unknown_job() {
        let registry = InMemoryJobRegistry::new();

        let result = registry.get(Uuid::new_v4()).await;
        assert!(matches!(result, Err(JobRegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_begin_transition() {
        let registry = InMemoryJobRegistry::new();
        let job = registry
            .create("minutes.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();

        let updated = registry
            .transition(job.id(), JobTransition::Begin)
            .await
            .unwrap();

        assert_eq!(updated.status(), &JobStatus::Processing);
    }

    #[tokio::test]
    async fn test_second_begin_conflicts() {
        let registry = InMemoryJobRegistry::new();
        let job = registry
            .create("minutes.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();

        registry
            .transition(job.id(), JobTransition::Begin)
            .await
            .unwrap();

        let second = registry.transition(job.id(), JobTransition::Begin).await;
        match second {
            Err(JobRegistryError::Conflict { status, .. }) => {
                assert_eq!(status, JobStatus::Processing);
            }
            other => panic!("Expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_concurrent_begin_exactly_one_wins() {
        let registry = Arc::new(InMemoryJobRegistry::new());
        let job = registry
            .create("minutes.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();

        let (first, second) = tokio::join!(
            registry.transition(job.id(), JobTransition::Begin),
            registry.transition(job.id(), JobTransition::Begin),
        );

        let wins = first.is_ok() as u8 + second.is_ok() as u8;
        assert_eq!(wins, 1);

        let loser = if first.is_ok() { second } else { first };
        assert!(matches!(loser, Err(JobRegistryError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_complete_transition() {
        let registry = InMemoryJobRegistry::new();
        let job = registry
            .create("minutes.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();
        registry
            .transition(job.id(), JobTransition::Begin)
            .await
            .unwrap();

        let updated = registry
            .transition(
                job.id(),
                JobTransition::Complete {
                    results: sample_results(),
                    agent_failures: vec!["Summarizer: Empty response from model".to_string()],
                    processing_time_seconds: 2.41,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status(), &JobStatus::Completed);
        assert!(updated.results().is_some());
        assert_eq!(updated.agent_failures().map(|f| f.len()), Some(1));
        assert_eq!(updated.processing_time_seconds(), Some(2.41));
    }

    #[tokio::test]
    async fn test_complete_requires_processing() {
        let registry = InMemoryJobRegistry::new();
        let job = registry
            .create("minutes.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();

        let result = registry
            .transition(
                job.id(),
                JobTransition::Complete {
                    results: sample_results(),
                    agent_failures: Vec::new(),
                    processing_time_seconds: 0.1,
                },
            )
            .await;

        assert!(matches!(result, Err(JobRegistryError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_fail_transition() {
        let registry = InMemoryJobRegistry::new();
        let job = registry
            .create("minutes.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();
        registry
            .transition(job.id(), JobTransition::Begin)
            .await
            .unwrap();

        let updated = registry
            .transition(
                job.id(),
                JobTransition::Fail {
                    error: "Analysis task crashed".to_string(),
                    processing_time_seconds: 0.52,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status(), &JobStatus::Failed);
        assert_eq!(updated.error(), Some("Analysis task crashed"));
        assert!(updated.results().is_none());
    }

    #[tokio::test]
    async fn test_terminal_jobs_reject_further_transitions() {
        let registry = InMemoryJobRegistry::new();
        let job = registry
            .create("minutes.txt".to_string(), SAMPLE_TEXT.to_string())
            .await
            .unwrap();
        registry
            .transition(job.id(), JobTransition::Begin)
            .await
            .unwrap();
        registry
            .transition(
                job.id(),
                JobTransition::Complete {
                    results: sample_results(),
                    agent_failures: Vec::new(),
                    processing_time_seconds: 0.3,
                },
            )
            .await
            .unwrap();

        let begin_again = registry.transition(job.id(), JobTransition::Begin).await;
        assert!(matches!(
            begin_again,
            Err(JobRegistryError::Conflict { .. })
        ));

        let fail_after = registry
            .transition(
                job.id(),
                JobTransition::Fail {
                    error: "late".to_string(),
                    processing_time_seconds: 0.4,
                },
            )
            .await;
        assert!(matches!(fail_after, Err(JobRegistryError::Conflict { .. })));
    }
}
