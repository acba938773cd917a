pub mod analysis_provider;
pub mod document_extractor;

pub use analysis_provider::AnalysisProvider;
pub use document_extractor::DocumentExtractor;
