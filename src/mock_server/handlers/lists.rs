//! List endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::{ensure_authorized, not_found};
use crate::mock_server::state::{ListMetadata, MockState};

/// Response for the metadata endpoint.
#[derive(Debug, Serialize)]
pub struct ListsMetadataResponse {
    pub lists: Vec<ListMetadata>,
}

/// Parameters for creating a list.
#[derive(Debug, Deserialize)]
pub struct CreateListParams {
    pub name: String,
    pub state: Option<String>,
}

/// Parameters for updating a list.
#[derive(Debug, Deserialize)]
pub struct UpdateListParams {
    pub name: Option<String>,
    pub state: Option<String>,
}

/// Query parameters for fetching a list.
#[derive(Debug, Default, Deserialize)]
pub struct GetListQuery {
    pub status: Option<String>,
}

/// GET /v2/householdlists/
pub async fn get_lists_metadata(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    (
        StatusCode::OK,
        Json(ListsMetadataResponse {
            lists: state.lists_metadata(),
        }),
    )
        .into_response()
}

/// POST /v2/householdlists/
pub async fn create_list(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(params): Json<CreateListParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    let list = state.create_list(params.name, params.state);
    (StatusCode::CREATED, Json(list.metadata())).into_response()
}

/// GET /v2/householdlists/{listId}
pub async fn get_list(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(list_id): Path<String>,
    Query(query): Query<GetListQuery>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let list_id = decode(&list_id);

    let state = state.read().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    if let Some(status) = query.status.as_deref() {
        if status != "active" && status != "completed" {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Invalid status filter",
                    "message": format!("Unknown status value: {status}")
                })),
            )
                .into_response();
        }
    }

    match state.get_list(&list_id) {
        Some(list) => {
            let mut list = list.clone();
            if let Some(status) = query.status.as_deref() {
                list.items.retain(|i| i.status == status);
            }
            (StatusCode::OK, Json(list)).into_response()
        }
        None => not_found("list", &list_id),
    }
}

/// PUT /v2/householdlists/{listId}
pub async fn update_list(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(list_id): Path<String>,
    headers: HeaderMap,
    Json(params): Json<UpdateListParams>,
) -> impl IntoResponse {
    let list_id = decode(&list_id);

    let mut state = state.write().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    match state.update_list(&list_id, params.name, params.state) {
        Some(list) => (StatusCode::OK, Json(list.metadata())).into_response(),
        None => not_found("list", &list_id),
    }
}

/// DELETE /v2/householdlists/{listId}
pub async fn delete_list(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(list_id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let list_id = decode(&list_id);

    let mut state = state.write().await;
    if let Some(denied) = ensure_authorized(&state, &headers) {
        return denied;
    }

    if state.delete_list(&list_id) {
        StatusCode::OK.into_response()
    } else {
        not_found("list", &list_id)
    }
}

pub(crate) fn decode(id: &str) -> String {
    urlencoding::decode(id)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| id.to_string())
}
