use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::database::ActivityStore;

pub async fn health_handler(State(store): State<ActivityStore>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "activities": store.len().await,
    }))
}
