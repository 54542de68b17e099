use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::chat_record as ChatRecordApi;

use log::*;

/// GET every recorded chat message, oldest first
#[utoipa::path(
    get,
    path = "/chat_history",
    responses(
        (status = 200, description = "Successfully retrieved the chat history", body = [domain::chat_records::Model]),
        (status = 500, description = "Chat history could not be read")
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    debug!("GET all chat records");

    let chat_records = ChatRecordApi::find_all(app_state.db_conn_ref()).await?;

    debug!("Found {} chat records", chat_records.len());

    Ok(Json(chat_records))
}
