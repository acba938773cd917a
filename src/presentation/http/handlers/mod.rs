pub mod analysis_handler;
pub mod document_handler;

pub use analysis_handler::AnalysisHandler;
pub use document_handler::DocumentHandler;
