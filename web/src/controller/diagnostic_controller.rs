use crate::response::analysis::DiagnosticResponse;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use log::*;

/// GET a round trip through both model providers using a fixed greeting.
///
/// Meant for checking provider credentials; nothing is recorded and the payload
/// shape may change.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Both providers answered", body = DiagnosticResponse),
        (status = 502, description = "A provider failed")
    )
)]
pub async fn probe(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    debug!("GET provider diagnostic");

    let report = app_state.analyzer.probe().await?;

    Ok(Json(DiagnosticResponse::from(report)))
}
