use axum::{routing::post, Router};
use std::sync::Arc;

use crate::presentation::http::handlers::DocumentHandler;

pub fn document_routes(document_handler: Arc<DocumentHandler>) -> Router {
    Router::new()
        .route("/upload", post(DocumentHandler::upload_document))
        .with_state(document_handler)
}
