use crate::modules::items::core::errors::ItemError;
use crate::modules::items::core::item::{Item, ItemDraft, ItemId};
use crate::modules::items::core::ports::ItemStore;
use async_trait::async_trait;
use tokio::sync::Mutex;

struct ItemsState {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Default for ItemsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ItemsState {
    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// Process-local item collection. A single lock covers the items and the id counter,
/// so every operation runs serialized.
#[derive(Default)]
pub struct InMemoryItems {
    state: Mutex<ItemsState>,
}

impl InMemoryItems {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItems {
    async fn list(&self) -> Vec<Item> {
        self.state.lock().await.items.clone()
    }

    async fn get(&self, id: ItemId) -> Result<Item, ItemError> {
        let state = self.state.lock().await;
        state
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(ItemError::NotFound)
    }

    async fn create(&self, draft: ItemDraft) -> Item {
        let mut state = self.state.lock().await;
        let item = Item::from_draft(state.next_id, draft);
        state.next_id += 1;
        state.items.push(item.clone());
        tracing::debug!(id = item.id, "item created");
        item
    }

    async fn update(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ItemError> {
        let mut state = self.state.lock().await;
        let index = state.position(id).ok_or(ItemError::NotFound)?;
        let item = Item::from_draft(id, draft);
        state.items[index] = item.clone();
        tracing::debug!(id, "item updated");
        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> Result<(), ItemError> {
        let mut state = self.state.lock().await;
        let index = state.position(id).ok_or(ItemError::NotFound)?;
        state.items.remove(index);
        tracing::debug!(id, "item deleted");
        Ok(())
    }
}
