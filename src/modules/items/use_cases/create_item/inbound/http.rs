use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::items::adapters::inbound::http_responses::{ItemResponse, decode_draft};
use crate::modules::items::core::errors::ItemError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ItemError> {
    let draft = decode_draft(&body)?;
    let item = state.items.create(draft).await;
    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            data: item,
            message: "Item created successfully",
        }),
    ))
}
