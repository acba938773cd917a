use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::use_cases::fetch_results::FetchResultsError;
use crate::application::use_cases::start_analysis::StartAnalysisError;
use crate::application::use_cases::upload_document::UploadDocumentError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<UploadDocumentError> for ApiError {
    fn from(error: UploadDocumentError) -> Self {
        match &error {
            UploadDocumentError::Registry(_) => ApiError::Internal(error.to_string()),
            _ => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl From<StartAnalysisError> for ApiError {
    fn from(error: StartAnalysisError) -> Self {
        match &error {
            StartAnalysisError::JobNotFound(_) => ApiError::NotFound(error.to_string()),
            StartAnalysisError::AlreadyStarted { .. } => ApiError::BadRequest(error.to_string()),
            StartAnalysisError::Registry(_) => ApiError::Internal(error.to_string()),
        }
    }
}

impl From<FetchResultsError> for ApiError {
    fn from(error: FetchResultsError) -> Self {
        match &error {
            FetchResultsError::JobNotFound(_) => ApiError::NotFound(error.to_string()),
            FetchResultsError::Registry(_) => ApiError::Internal(error.to_string()),
        }
    }
}
