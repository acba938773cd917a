use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::use_cases::start_analysis::StartAnalysisResponse;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequestDto {
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct StartAnalysisResponseDto {
    pub job_id: Uuid,
    pub message: String,
    pub status: String,
}

impl From<StartAnalysisResponse> for StartAnalysisResponseDto {
    fn from(response: StartAnalysisResponse) -> Self {
        Self {
            job_id: response.job_id,
            message: response.message,
            status: response.status,
        }
    }
}
