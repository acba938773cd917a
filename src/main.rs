mod application;
mod domain;
mod infrastructure;
mod presentation;

use infrastructure::container::AppContainer;
use presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let container = AppContainer::new()?;

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok());

    let server = HttpServer::new(
        container.document_handler.clone(),
        container.analysis_handler.clone(),
        port,
    );

    server.run().await
}
