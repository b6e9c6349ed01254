use crate::modules::items::core::item::ItemId;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Invalid ID format";
pub const NOT_FOUND_MESSAGE: &str = "Item not found";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
}

pub fn parse_item_id(raw: &str) -> Result<ItemId, ItemError> {
    raw.parse::<ItemId>()
        .map_err(|_| ItemError::InvalidArgument(INVALID_ID_MESSAGE.to_string()))
}
