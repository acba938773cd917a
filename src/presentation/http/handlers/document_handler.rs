use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::use_cases::{
    upload_document::UploadDocumentRequest, UploadDocumentUseCase,
};
use crate::presentation::http::dto::document_dto::UploadResponseDto;
use crate::presentation::http::errors::ApiError;

pub struct DocumentHandler {
    upload_use_case: Arc<UploadDocumentUseCase>,
}

impl DocumentHandler {
    pub fn new(upload_use_case: Arc<UploadDocumentUseCase>) -> Self {
        Self { upload_use_case }
    }

    pub async fn upload_document(
        State(handler): State<Arc<DocumentHandler>>,
        mut multipart: Multipart,
    ) -> Result<impl IntoResponse, ApiError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to process form: {}", e)))?
        {
            let file_name = field
                .file_name()
                .ok_or_else(|| ApiError::BadRequest("File name not provided".to_string()))?
                .to_string();

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read file data: {}", e)))?
                .to_vec();

            let response = handler
                .upload_use_case
                .execute(UploadDocumentRequest { file_name, data })
                .await?;

            return Ok((StatusCode::CREATED, Json(UploadResponseDto::from(response))));
        }

        Err(ApiError::BadRequest(
            "No file provided in the request".to_string(),
        ))
    }
}
