use axum::Json;
use serde::Serialize;

use crate::shell::config::SERVICE_NAME;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

pub async fn handle() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: format!("{SERVICE_NAME} is running"),
    })
}
