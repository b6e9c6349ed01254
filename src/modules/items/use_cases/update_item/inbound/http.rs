use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

use crate::modules::items::adapters::inbound::http_responses::{ItemResponse, decode_draft};
use crate::modules::items::core::errors::{ItemError, parse_item_id};
use crate::shell::state::AppState;

// The id is checked before the body, so a bad id wins over a bad body.
pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<ItemResponse>, ItemError> {
    let id = parse_item_id(&raw_id)?;
    let draft = decode_draft(&body)?;
    let item = state.items.update(id, draft).await?;
    Ok(Json(ItemResponse {
        data: item,
        message: "Item updated successfully",
    }))
}
