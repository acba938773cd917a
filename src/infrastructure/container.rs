use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        ports::{AnalysisProvider, DocumentExtractor},
        services::AnalysisOrchestrator,
        use_cases::{FetchResultsUseCase, StartAnalysisUseCase, UploadDocumentUseCase},
    },
    domain::repositories::JobRegistry,
    infrastructure::{
        external_services::{document_extractors::CompositeExtractor, GeminiAnalysisProvider},
        memory::InMemoryJobRegistry,
    },
    presentation::http::handlers::{AnalysisHandler, DocumentHandler},
};

pub struct AppContainer {
    // Registry
    pub job_registry: Arc<dyn JobRegistry>,

    // External Services
    pub analysis_provider: Arc<dyn AnalysisProvider>,
    pub document_extractor: Arc<dyn DocumentExtractor>,

    // Application Services
    pub orchestrator: Arc<AnalysisOrchestrator>,

    // Use Cases
    pub upload_document_use_case: Arc<UploadDocumentUseCase>,
    pub start_analysis_use_case: Arc<StartAnalysisUseCase>,
    pub fetch_results_use_case: Arc<FetchResultsUseCase>,

    // HTTP Handlers
    pub document_handler: Arc<DocumentHandler>,
    pub analysis_handler: Arc<AnalysisHandler>,
}

impl AppContainer {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Create the volatile registry
        let job_registry: Arc<dyn JobRegistry> = Arc::new(InMemoryJobRegistry::new());

        // Create external services
        let analysis_provider: Arc<dyn AnalysisProvider> =
            Arc::new(GeminiAnalysisProvider::from_env()?);
        let document_extractor: Arc<dyn DocumentExtractor> = Arc::new(CompositeExtractor::new());

        // Create the orchestrator
        let mut orchestrator =
            AnalysisOrchestrator::new(job_registry.clone(), analysis_provider.clone());
        if let Ok(secs) = std::env::var("ANALYSIS_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| format!("Invalid ANALYSIS_TIMEOUT_SECS: {}", e))?;
            orchestrator = orchestrator.with_capability_timeout(Duration::from_secs(secs));
        }
        let orchestrator = Arc::new(orchestrator);

        // Create use cases
        let upload_document_use_case = Arc::new(UploadDocumentUseCase::new(
            job_registry.clone(),
            document_extractor.clone(),
        ));

        let start_analysis_use_case = Arc::new(StartAnalysisUseCase::new(
            job_registry.clone(),
            orchestrator.clone(),
        ));

        let fetch_results_use_case = Arc::new(FetchResultsUseCase::new(job_registry.clone()));

        // Create HTTP handlers
        let document_handler = Arc::new(DocumentHandler::new(upload_document_use_case.clone()));

        let analysis_handler = Arc::new(AnalysisHandler::new(
            start_analysis_use_case.clone(),
            fetch_results_use_case.clone(),
        ));

        Ok(Self {
            job_registry,
            analysis_provider,
            document_extractor,
            orchestrator,
            upload_document_use_case,
            start_analysis_use_case,
            fetch_results_use_case,
            document_handler,
            analysis_handler,
        })
    }
}
