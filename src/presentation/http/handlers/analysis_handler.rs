use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_cases::{
    fetch_results::FetchResultsRequest, start_analysis::StartAnalysisRequest, FetchResultsUseCase,
    StartAnalysisUseCase,
};
use crate::presentation::http::dto::analysis_dto::{AnalyzeRequestDto, StartAnalysisResponseDto};
use crate::presentation::http::dto::job_record_dto::JobRecordDto;
use crate::presentation::http::errors::ApiError;

pub struct AnalysisHandler {
    start_analysis_use_case: Arc<StartAnalysisUseCase>,
    fetch_results_use_case: Arc<FetchResultsUseCase>,
}

impl AnalysisHandler {
    pub fn new(
        start_analysis_use_case: Arc<StartAnalysisUseCase>,
        fetch_results_use_case: Arc<FetchResultsUseCase>,
    ) -> Self {
        Self {
            start_analysis_use_case,
            fetch_results_use_case,
        }
    }

    pub async fn start_analysis(
        State(handler): State<Arc<AnalysisHandler>>,
        Json(request): Json<AnalyzeRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let response = handler
            .start_analysis_use_case
            .execute(StartAnalysisRequest {
                job_id: request.job_id,
            })
            .await?;

        Ok((
            StatusCode::ACCEPTED,
            Json(StartAnalysisResponseDto::from(response)),
        ))
    }

    pub async fn get_results(
        State(handler): State<Arc<AnalysisHandler>>,
        Path(job_id): Path<Uuid>,
    ) -> Result<impl IntoResponse, ApiError> {
        let response = handler
            .fetch_results_use_case
            .execute(FetchResultsRequest { job_id })
            .await?;

        Ok((StatusCode::OK, Json(JobRecordDto::from(&response.job))))
    }
}
