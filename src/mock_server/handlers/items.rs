//! List-item endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::lists::decode;
use super::{ensure_authorized, not_found};
use crate::mock_server::state::MockState;

/// Parameters for creating a list item.
#[derive(Debug, Deserialize)]
pub struct CreateItemParams {
    pub value: String,
    pub status: Option<String>,
}

/// Parameters for updating a list item.
#[derive(Debug, Deserialize)]
pub struct UpdateItemParams {
    pub value: Option<String>,
    pub status: Option<String>,
}

/// POST /v2/householdlists/{listId}/items
pub async fn create_list_item(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(list_id): Path<String>,
    headers: HeaderMap,
    Json(params): Json<CreateItemParams>,
) -> impl IntoResponse {
    let list_id = decode(&list_id);

    let mut state = state.write().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    match state.create_item(&list_id, params.value, params.status) {
        Some(item) => (StatusCode::CREATED, Json(item)).into_response(),
        None => not_found("list", &list_id),
    }
}

/// GET /v2/householdlists/{listId}/items/{itemId}
pub async fn get_list_item(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((list_id, item_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let list_id = decode(&list_id);
    let item_id = decode(&item_id);

    let state = state.read().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    match state.get_item(&list_id, &item_id) {
        Some(item) => (StatusCode::OK, Json(item.clone())).into_response(),
        None => not_found("list item", &item_id),
    }
}

/// PUT /v2/householdlists/{listId}/items/{itemId}
pub async fn update_list_item(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((list_id, item_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(params): Json<UpdateItemParams>,
) -> impl IntoResponse {
    let list_id = decode(&list_id);
    let item_id = decode(&item_id);

    let mut state = state.write().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    match state.update_item(&list_id, &item_id, params.value, params.status) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => not_found("list item", &item_id),
    }
}

/// DELETE /v2/householdlists/{listId}/items/{itemId}
pub async fn delete_list_item(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((list_id, item_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let list_id = decode(&list_id);
    let item_id = decode(&item_id);

    let mut state = state.write().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    if state.delete_item(&list_id, &item_id) {
        StatusCode::OK.into_response()
    } else {
        not_found("list item", &item_id)
    }
}
