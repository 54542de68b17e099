//! Entry point for the companion platform API server.

use domain::analysis::Analyzer;
use domain::gateway::{groq::GroqClient, hugging_face::HuggingFaceClient};
use log::*;
use service::{config::Config, logging::Logger};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!("Starting up the Companion Platform API server...");

    let groq_api_key = match config.require_groq_api_key() {
        Ok(api_key) => api_key,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let timeout = Duration::from_secs(config.provider_timeout_secs);

    let generator = match GroqClient::new(
        &groq_api_key,
        config.groq_base_url(),
        config.groq_model(),
        timeout,
    ) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create the Groq client: {e}");
            std::process::exit(1);
        }
    };

    let classifier = match HuggingFaceClient::new(
        config.hugging_face_api_key().as_deref(),
        config.hugging_face_base_url(),
        config.emotion_model(),
        config.emotion_top_k,
        timeout,
    ) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create the Hugging Face client: {e}");
            std::process::exit(1);
        }
    };

    info!(
        "Using reply model {} and emotion model {}",
        config.groq_model(),
        config.emotion_model()
    );

    let db = match service::init_database(&config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let analyzer = Analyzer::new(Arc::new(classifier), Arc::new(generator));
    let app_state = web::AppState::new(service::AppState::new(config, &db), analyzer);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped with an error: {e}");
        std::process::exit(1);
    }
}
