use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::items::adapters::inbound::http_responses::MessageResponse;
use crate::modules::items::core::errors::{ItemError, parse_item_id};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ItemError> {
    let id = parse_item_id(&raw_id)?;
    state.items.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}
