use crate::controller::{
    analysis_controller, chat_history_controller, diagnostic_controller, health_check_controller,
};
use crate::{params, response, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Companion Platform API"
        ),
        paths(
            analysis_controller::analyze,
            chat_history_controller::index,
            diagnostic_controller::probe,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                domain::chat_records::Model,
                domain::emotion::Emotion,
                params::analysis::AnalyzeParams,
                response::analysis::AnalysisResponse,
                response::analysis::CrisisHelp,
                response::analysis::DiagnosticResponse,
                response::analysis::EmotionReportResponse,
            )
        ),
        tags(
            (name = "companion_platform", description = "Emotion-aware Companion Chat API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    let static_dir = app_state.config().static_dir().to_string();

    Router::new()
        .merge(analysis_routes(app_state.clone()))
        .merge(chat_history_routes(app_state.clone()))
        .merge(diagnostic_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .nest_service("/ui", static_routes(&static_dir))
}

fn analysis_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/analyze_emotions", post(analysis_controller::analyze))
        .with_state(app_state)
}

fn chat_history_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/chat_history", get(chat_history_controller::index))
        .with_state(app_state)
}

fn diagnostic_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(diagnostic_controller::probe))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

// Serves the bundled chat page and its assets
fn static_routes(static_dir: &str) -> ServeDir {
    ServeDir::new(static_dir)
}
