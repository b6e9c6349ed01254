use crate::modules::items::core::errors::ItemError;
use crate::modules::items::core::item::{Item, ItemDraft, ItemId};
use async_trait::async_trait;

/// Owner of the item collection. Items keep insertion order and ids are never reused.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(&self) -> Vec<Item>;

    async fn get(&self, id: ItemId) -> Result<Item, ItemError>;

    async fn create(&self, draft: ItemDraft) -> Item;

    /// Replaces the whole record in place; the stored id is kept.
    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ItemError>;

    async fn delete(&self, id: ItemId) -> Result<(), ItemError>;
}
