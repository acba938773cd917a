use serde::Serialize;
use uuid::Uuid;

use crate::application::use_cases::upload_document::UploadDocumentResponse;

#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub job_id: Uuid,
    pub message: String,
    pub document_name: String,
    pub status: String,
}

impl From<UploadDocumentResponse> for UploadResponseDto {
    fn from(response: UploadDocumentResponse) -> Self {
        Self {
            job_id: response.job_id,
            message: response.message,
            document_name: response.document_name,
            status: response.status,
        }
    }
}
