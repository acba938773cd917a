use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::presentation::http::dto::HealthResponseDto;

pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Multi-Agent Document Analysis System (Gemini)",
        "version": env!("CARGO_PKG_VERSION"),
        "llm_provider": "Google Gemini",
        "endpoints": {
            "POST /upload": "Upload a document (PDF/TXT)",
            "POST /analyze": "Start analysis on uploaded document",
            "GET /results/{job_id}": "Get analysis results"
        }
    }))
}

async fn health_handler() -> impl IntoResponse {
    let health_response = HealthResponseDto {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(health_response))
}
