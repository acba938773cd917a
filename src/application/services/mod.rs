pub mod analysis_orchestrator;

pub use analysis_orchestrator::AnalysisOrchestrator;
