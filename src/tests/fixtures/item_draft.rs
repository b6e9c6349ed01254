// Builder for request bodies used across the unit tests.

use crate::modules::items::core::item::{ItemDraft, ItemId};

pub struct ItemDraftBuilder {
    inner: ItemDraft,
}

impl Default for ItemDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ItemDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: ItemDraft::default(),
        }
    }

    pub fn id(mut self, v: ItemId) -> Self {
        self.inner.id = Some(v);
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> ItemDraft {
        self.inner
    }
}

#[cfg(test)]
mod item_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_builds_an_empty_draft() {
        assert_eq!(ItemDraftBuilder::default().build(), ItemDraft::default());
    }

    #[rstest]
    fn setters_override_all_fields() {
        let draft = ItemDraftBuilder::new()
            .id(4)
            .name("Lamp")
            .description("Desk lamp")
            .build();
        assert_eq!(draft.id, Some(4));
        assert_eq!(draft.name, "Lamp");
        assert_eq!(draft.description, "Desk lamp");
    }
}
