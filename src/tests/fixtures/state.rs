use crate::modules::items::core::item::Item;
use crate::shell::state::AppState;
use crate::tests::fixtures::item_draft::ItemDraftBuilder;
use axum::response::Response;
use http_body_util::BodyExt;

pub fn make_test_state() -> AppState {
    AppState::in_memory()
}

/// State pre-populated with items named after `names`, ids 1..=n.
pub async fn make_seeded_state(names: &[&str]) -> (AppState, Vec<Item>) {
    let state = make_test_state();
    let mut items = Vec::with_capacity(names.len());
    for name in names {
        let draft = ItemDraftBuilder::new()
            .name(*name)
            .description(format!("{name} description"))
            .build();
        items.push(state.items.create(draft).await);
    }
    (state, items)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
