use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::items::adapters::inbound::http_responses::ItemResponse;
use crate::modules::items::core::errors::{ItemError, parse_item_id};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ItemResponse>, ItemError> {
    let id = parse_item_id(&raw_id)?;
    let item = state.items.get(id).await?;
    Ok(Json(ItemResponse {
        data: item,
        message: "Item retrieved successfully",
    }))
}
