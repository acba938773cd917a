use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Uploaded,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_uploaded(&self) -> bool {
        matches!(self, JobStatus::Uploaded)
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, JobStatus::Processing)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, JobStatus::Completed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, JobStatus::Failed)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    pub fn can_transition_to(&self, new_status: &JobStatus) -> bool {
        match (self, new_status) {
            (JobStatus::Uploaded, JobStatus::Processing) => true,
            (JobStatus::Processing, JobStatus::Completed) => true,
            (JobStatus::Processing, JobStatus::Failed) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Uploaded => "uploaded",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "uploaded" => Ok(JobStatus::Uploaded),
            "processing" => Ok(JobStatus::Processing),
            "completed" => Ok(JobStatus::Completed),
            "failed" => Ok(JobStatus::Failed),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Uploaded
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
