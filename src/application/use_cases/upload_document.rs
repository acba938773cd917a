use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::document_extractor::{
    DocumentExtractor, DocumentKind, ExtractionError,
};
use crate::domain::repositories::{job_registry::JobRegistryError, JobRegistry};

#[derive(Debug)]
pub enum UploadDocumentError {
    UnsupportedType,
    Extraction(String),
    Validation(String),
    Registry(String),
}

impl std::fmt::Display for UploadDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadDocumentError::UnsupportedType => {
                write!(f, "Only PDF and TXT files are supported")
            }
            // Extraction and validation messages go to clients verbatim.
            UploadDocumentError::Extraction(msg) => write!(f, "{}", msg),
            UploadDocumentError::Validation(msg) => write!(f, "{}", msg),
            UploadDocumentError::Registry(msg) => write!(f, "Registry error: {}", msg),
        }
    }
}

impl std::error::Error for UploadDocumentError {}

impl From<ExtractionError> for UploadDocumentError {
    fn from(error: ExtractionError) -> Self {
        UploadDocumentError::Extraction(error.to_string())
    }
}

impl From<JobRegistryError> for UploadDocumentError {
    fn from(error: JobRegistryError) -> Self {
        match error {
            JobRegistryError::ValidationError(msg) => UploadDocumentError::Validation(msg),
            _ => UploadDocumentError::Registry(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadDocumentRequest {
    pub file_name: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadDocumentResponse {
    pub job_id: Uuid,
    pub document_name: String,
    pub status: String,
    pub message: String,
}

pub struct UploadDocumentUseCase {
    job_registry: Arc<dyn JobRegistry>,
    document_extractor: Arc<dyn DocumentExtractor>,
}

impl UploadDocumentUseCase {
    pub fn new(
        job_registry: Arc<dyn JobRegistry>,
        document_extractor: Arc<dyn DocumentExtractor>,
    ) -> Self {
        Self {
            job_registry,
            document_extractor,
        }
    }

    pub async fn execute(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<UploadDocumentResponse, UploadDocumentError> {
        let kind = DocumentKind::from_file_name(&request.file_name)
            .ok_or(UploadDocumentError::UnsupportedType)?;

        let text = self.document_extractor.extract(&request.data, kind).await?;

        let job = self.job_registry.create(request.file_name, text).await?;

        Ok(UploadDocumentResponse {
            job_id: job.id(),
            document_name: job.document_name().to_string(),
            status: job.status().to_string(),
            message: "Document uploaded successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryJobRegistry;
    use async_trait::async_trait;

    struct StubExtractor {
        output: Result<String, ExtractionError>,
    }

    impl StubExtractor {
        fn returning(text: &str) -> Self {
            Self {
                output: Ok(text.to_string()),
            }
        }

        fn failing(error: ExtractionError) -> Self {
            Self { output: Err(error) }
        }
    }

    #[async_trait]
    impl DocumentExtractor for StubExtractor {
        async fn extract(
            &self,
            _data: &[u8],
            _kind: DocumentKind,
        ) -> Result<String, ExtractionError> {
            match &self.output {
                Ok(text) => Ok(text.clone()),
                Err(ExtractionError::NoExtractableText) => {
                    Err(ExtractionError::NoExtractableText)
                }
                Err(e) => Err(ExtractionError::ExtractionFailed(e.to_string())),
            }
        }

        fn can_extract(&self, _kind: DocumentKind) -> bool {
            true
        }
    }

    fn use_case(
        registry: Arc<InMemoryJobRegistry>,
        extractor: StubExtractor,
    ) -> UploadDocumentUseCase {
        UploadDocumentUseCase::new(registry, Arc::new(extractor))
    }

    #[tokio::test]
    async fn test_upload_creates_job() {
        let registry = Arc::new(InMemoryJobRegistry::new());
        let use_case = use_case(
            registry.clone(),
            StubExtractor::returning("The annual report covers revenue and hiring."),
        );

        let response = use_case
            .execute(UploadDocumentRequest {
                file_name: "report.txt".to_string(),
                data: b"The annual report covers revenue and hiring.".to_vec(),
            })
            .await
            .unwrap();

        assert_eq!(response.document_name, "report.txt");
        assert_eq!(response.status, "uploaded");
        assert_eq!(response.message, "Document uploaded successfully");

        let job = registry.get(response.job_id).await.unwrap();
        assert_eq!(job.document_name(), "report.txt");
    }

    #[tokio::test]
    async fn test_rejects_unsupported_extension() {
        let registry = Arc::new(InMemoryJobRegistry::new());
        let use_case = use_case(registry.clone(), StubExtractor::returning("irrelevant text"));

        let result = use_case
            .execute(UploadDocumentRequest {
                file_name: "slides.docx".to_string(),
                data: vec![1, 2, 3],
            })
            .await;

        match result {
            Err(UploadDocumentError::UnsupportedType) => {}
            other => panic!("Expected UnsupportedType, got {:?}", other),
        }
        assert_eq!(registry.job_count().await, 0);
    }

    #[tokio::test]
    async fn test_rejects_short_document() {
        let registry = Arc::new(InMemoryJobRegistry::new());
        let use_case = use_case(registry.clone(), StubExtractor::returning("short"));

        let result = use_case
            .execute(UploadDocumentRequest {
                file_name: "note.txt".to_string(),
                data: b"short".to_vec(),
            })
            .await;

        match result {
            Err(UploadDocumentError::Validation(msg)) => {
                assert_eq!(msg, "Document appears to be empty or too short");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(registry.job_count().await, 0);
    }

    #[tokio::test]
    async fn test_extraction_failure_is_reported() {
        let registry = Arc::new(InMemoryJobRegistry::new());
        let use_case = use_case(
            registry.clone(),
            StubExtractor::failing(ExtractionError::NoExtractableText),
        );

        let result = use_case
            .execute(UploadDocumentRequest {
                file_name: "scan.pdf".to_string(),
                data: vec![0x25, 0x50, 0x44, 0x46],
            })
            .await;

        match result {
            Err(UploadDocumentError::Extraction(msg)) => {
                assert_eq!(msg, "No extractable text found in the document");
            }
            other => panic!("Expected extraction error, got {:?}", other),
        }
        assert_eq!(registry.job_count().await, 0);
    }
}
