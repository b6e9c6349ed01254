use axum::{Json, extract::State};

use crate::modules::items::adapters::inbound::http_responses::ItemListResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<ItemListResponse> {
    let items = state.items.list().await;
    Json(ItemListResponse {
        count: items.len(),
        data: items,
        message: "Items retrieved successfully",
    })
}

#[cfg(test)]
mod list_items_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{body_json, make_seeded_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/items", get(handle)).with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_empty_array_when_no_items_exist() {
        let response = app(make_test_state())
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "data": [],
                "count": 0,
                "message": "Items retrieved successfully"
            })
        );
    }

    #[tokio::test]
    async fn it_should_return_items_in_creation_order_with_count() {
        let (state, _) = make_seeded_state(&["A", "B", "C"]).await;

        let response = app(state)
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["count"], 3);
        let names: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(json["data"][0]["id"], 1);
        assert_eq!(json["data"][2]["id"], 3);
    }
}
