use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{AnalysisJob, AnalysisResults};
use crate::domain::value_objects::{EntitySet, Sentiment};

/// Wire form of a job record. The extracted text never appears here, and
/// optional sections are omitted entirely until they are populated.
#[derive(Debug, Serialize)]
pub struct JobRecordDto {
    pub job_id: Uuid,
    pub status: String,
    pub document_name: String,
    pub uploaded_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<AnalysisResultsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_failures: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_seconds: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResultsDto {
    pub summary: String,
    pub entities: EntitySetDto,
    pub sentiment: SentimentDto,
}

#[derive(Debug, Serialize)]
pub struct EntitySetDto {
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub dates: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SentimentDto {
    pub tone: String,
    pub confidence: f64,
}

impl From<&AnalysisJob> for JobRecordDto {
    fn from(job: &AnalysisJob) -> Self {
        Self {
            job_id: job.id(),
            status: job.status().to_string(),
            document_name: job.document_name().to_string(),
            uploaded_at: job.uploaded_at().to_rfc3339(),
            results: job.results().map(AnalysisResultsDto::from),
            agent_failures: job.agent_failures().map(|failures| failures.to_vec()),
            error: job.error().map(|error| error.to_string()),
            processing_time_seconds: job.processing_time_seconds(),
        }
    }
}

impl From<&AnalysisResults> for AnalysisResultsDto {
    fn from(results: &AnalysisResults) -> Self {
        Self {
            summary: results.summary.clone(),
            entities: EntitySetDto::from(&results.entities),
            sentiment: SentimentDto::from(&results.sentiment),
        }
    }
}

impl From<&EntitySet> for EntitySetDto {
    fn from(entities: &EntitySet) -> Self {
        Self {
            people: entities.people.clone(),
            organizations: entities.organizations.clone(),
            dates: entities.dates.clone(),
            locations: entities.locations.clone(),
        }
    }
}

impl From<&Sentiment> for SentimentDto {
    fn from(sentiment: &Sentiment) -> Self {
        Self {
            tone: sentiment.tone.to_string(),
            confidence: sentiment.confidence,
        }
    }
}
