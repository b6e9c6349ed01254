use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::items::core::errors::ItemError;
use crate::modules::items::core::item::{Item, ItemDraft};

#[derive(Serialize)]
pub struct ItemListResponse {
    pub data: Vec<Item>,
    pub count: usize,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ItemResponse {
    pub data: Item,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let status = match self {
            ItemError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ItemError::NotFound => StatusCode::NOT_FOUND,
        };
        tracing::debug!(%status, error = %self, "item request rejected");
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Decodes a raw request body as JSON whatever its `Content-Type`. A top-level `null`
/// is an empty draft; decoder errors become `InvalidArgument` with the decoder's text.
pub fn decode_draft(body: &[u8]) -> Result<ItemDraft, ItemError> {
    serde_json::from_slice::<Option<ItemDraft>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|err| ItemError::InvalidArgument(err.to_string()))
}
