use axum::http::{header, HeaderValue, Method};
use domain::analysis::Analyzer;
use log::*;
use sea_orm::DatabaseConnection;
use service::config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

mod controller;
mod error;
pub(crate) mod params;
pub(crate) mod response;
mod router;

pub use error::{Error, Result};

/// State shared by every request handler.
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub service: service::AppState,
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(service: service::AppState, analyzer: Analyzer) -> Self {
        Self {
            service,
            analyzer: Arc::new(analyzer),
        }
    }

    pub fn db_conn_ref(&self) -> &DatabaseConnection {
        self.service.db_conn_ref()
    }

    pub fn config(&self) -> &Config {
        &self.service.config
    }
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let host = app_state
        .config()
        .interface
        .as_deref()
        .unwrap_or("127.0.0.1")
        .to_string();
    let server_url = format!("{host}:{}", app_state.config().port);
    let cors_layer = cors_layer(&app_state.config().allowed_origins);

    info!("Server starting... listening for connections on http://{server_url}");

    let listener = TcpListener::bind(&server_url).await?;
    let app = router::define_routes(app_state).layer(cors_layer);

    axum::serve(listener, app).await
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {origin:?}: {e}");
                None
            }
        })
        .collect();

    debug!("CORS allowed origins: {origins:?}");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_origins_are_skipped() {
        // Building the layer must not panic on a bad origin.
        let _layer = cors_layer(&[
            "http://localhost:8501".to_string(),
            "bad\norigin".to_string(),
        ]);
    }
}
