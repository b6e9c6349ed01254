use axum::{Router, middleware, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::modules::items::use_cases::create_item::inbound::http as create_http;
use crate::modules::items::use_cases::delete_item::inbound::http as delete_http;
use crate::modules::items::use_cases::get_item::inbound::http as get_http;
use crate::modules::items::use_cases::list_items::inbound::http as list_http;
use crate::modules::items::use_cases::update_item::inbound::http as update_http;
use crate::shared::infrastructure::http::cors::cors;
use crate::shell::config::API_PREFIX;
use crate::shell::health;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let items = Router::new()
        .route("/items", get(list_http::handle).post(create_http::handle))
        .route(
            "/items/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        );

    Router::new()
        .nest(API_PREFIX, items)
        .route("/health", get(health::handle))
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors))
}
