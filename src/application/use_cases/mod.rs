pub mod fetch_results;
pub mod start_analysis;
pub mod upload_document;

pub use fetch_results::FetchResultsUseCase;
pub use start_analysis::StartAnalysisUseCase;
pub use upload_document::UploadDocumentUseCase;
