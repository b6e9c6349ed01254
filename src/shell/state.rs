use crate::modules::items::adapters::outbound::items_in_memory::InMemoryItems;
use crate::modules::items::core::ports::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemStore>) -> Self {
        Self { items }
    }

    /// Fresh, empty store. Each call yields an independent collection.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItems::new()))
    }
}
