use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::presentation::http::handlers::AnalysisHandler;

pub fn analysis_routes(analysis_handler: Arc<AnalysisHandler>) -> Router {
    Router::new()
        .route("/analyze", post(AnalysisHandler::start_analysis))
        .route("/results/{job_id}", get(AnalysisHandler::get_results))
        .with_state(analysis_handler)
}
