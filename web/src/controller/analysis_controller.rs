use crate::params::analysis::AnalyzeParams;
use crate::response::analysis::AnalysisResponse;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use log::*;

/// POST a chat message for emotion analysis and an empathetic reply.
///
/// The message is recorded in the chat history only when every step succeeds.
#[utoipa::path(
    post,
    path = "/analyze_emotions",
    request_body = AnalyzeParams,
    responses(
        (status = 200, description = "Successfully analyzed the message", body = AnalysisResponse),
        (status = 422, description = "Blank text or malformed body"),
        (status = 500, description = "Chat history could not be stored"),
        (status = 502, description = "An emotion classification or reply generation provider failed")
    )
)]
pub async fn analyze(
    State(app_state): State<AppState>,
    Json(params): Json<AnalyzeParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Analyze emotions of {} characters", params.text.len());

    let analysis = app_state
        .analyzer
        .analyze(app_state.db_conn_ref(), &params.text)
        .await?;

    debug!(
        "Analysis complete: primary_emotion={}, crisis_detected={}",
        analysis.primary_emotion, analysis.crisis_detected
    );

    Ok(Json(AnalysisResponse::from(analysis)))
}
