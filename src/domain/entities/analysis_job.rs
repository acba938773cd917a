use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{EntitySet, JobStatus, Sentiment};

/// Shortest trimmed document that is worth analyzing.
const MIN_TEXT_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisJob {
    id: Uuid,
    document_name: String,
    text: String,
    status: JobStatus,
    uploaded_at: DateTime<Utc>,
    results: Option<AnalysisResults>,
    agent_failures: Option<Vec<String>>,
    error: Option<String>,
    processing_time_seconds: Option<f64>,
}

/// One result per analysis capability, written together in a single update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub summary: String,
    pub entities: EntitySet,
    pub sentiment: Sentiment,
}

impl AnalysisJob {
    pub fn new(document_name: String, text: String) -> Result<Self, String> {
        if text.trim().len() < MIN_TEXT_LENGTH {
            return Err("Document appears to be empty or too short".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            document_name,
            text,
            status: JobStatus::Uploaded,
            uploaded_at: Utc::now(),
            results: None,
            agent_failures: None,
            error: None,
            processing_time_seconds: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> &JobStatus {
        &self.status
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn results(&self) -> Option<&AnalysisResults> {
        self.results.as_ref()
    }

    pub fn agent_failures(&self) -> Option<&[String]> {
        self.agent_failures.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn processing_time_seconds(&self) -> Option<f64> {
        self.processing_time_seconds
    }

    // Business logic methods
    pub fn start_processing(&mut self) -> Result<(), String> {
        if !self.status.is_uploaded() {
            return Err(format!("Job is already {}", self.status));
        }

        self.status = JobStatus::Processing;
        Ok(())
    }

    /// Finalizes the job with the merged capability results. An empty
    /// `agent_failures` list is recorded as absent, not as an empty field.
    pub fn complete(
        &mut self,
        results: AnalysisResults,
        agent_failures: Vec<String>,
        processing_time_seconds: f64,
    ) -> Result<(), String> {
        if !self.status.is_processing() {
            return Err(format!("Job is not processing: {}", self.status));
        }

        self.status = JobStatus::Completed;
        self.results = Some(results);
        self.agent_failures = if agent_failures.is_empty() {
            None
        } else {
            Some(agent_failures)
        };
        self.processing_time_seconds = Some(processing_time_seconds);
        Ok(())
    }

    pub fn fail(&mut self, error: String, processing_time_seconds: f64) -> Result<(), String> {
        if !self.status.is_processing() {
            return Err(format!("Job is not processing: {}", self.status));
        }

        self.status = JobStatus::Failed;
        self.error = Some(error);
        self.processing_time_seconds = Some(processing_time_seconds);
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}
