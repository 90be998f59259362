//! E2E tests using the mock List Management server.
//!
//! These tests exercise full workflows against the mock server, testing
//! realistic multi-request scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use alexa_lists::mock_server::{Fixtures, MockServer, MockState};
use alexa_lists::{ItemStatus, ListManagementClient};
use serde_json::json;

const TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> ListManagementClient {
    let mut client = ListManagementClient::new().unwrap();
    client.set_api_endpoint(server.url());
    client
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let http = reqwest::Client::new();
    let result = http.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// List Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_list_lifecycle_workflow() {
    let server = MockServer::start_empty().await;
    let client = client_for(&server);

    // Step 1: No lists yet
    let metadata = client.get_lists_metadata(TOKEN).await.unwrap();
    assert_eq!(metadata["lists"].as_array().unwrap().len(), 0);

    // Step 2: Create a list
    let created = client
        .create_list(&json!({ "name": "Groceries", "state": "active" }), TOKEN)
        .await
        .expect("Failed to create list");
    let list_id = created["listId"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Groceries");
    assert_eq!(created["version"], 1);

    // Step 3: It shows up in the metadata
    let metadata = client.get_lists_metadata(TOKEN).await.unwrap();
    let lists = metadata["lists"].as_array().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["listId"], list_id.as_str());

    // Step 4: Rename it
    let updated = client
        .update_list(&list_id, &json!({ "name": "Weekly Groceries" }), TOKEN)
        .await
        .expect("Failed to update list");
    assert_eq!(updated["name"], "Weekly Groceries");
    assert_eq!(updated["version"], 2);

    // Step 5: Delete it; fetching again is a 404
    client
        .delete_list(&list_id, TOKEN)
        .await
        .expect("Failed to delete list");

    let err = client.get_list(&list_id, None, TOKEN).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_item_workflow_with_status_filter() {
    let server = MockServer::start_empty().await;
    let client = client_for(&server);

    let created = client
        .create_list(&json!({ "name": "Chores" }), TOKEN)
        .await
        .unwrap();
    let list_id = created["listId"].as_str().unwrap().to_string();

    // Add two items, complete one of them
    let laundry = client
        .create_list_item(&list_id, &json!({ "value": "laundry" }), TOKEN)
        .await
        .unwrap();
    let dishes = client
        .create_list_item(&list_id, &json!({ "value": "dishes" }), TOKEN)
        .await
        .unwrap();
    let laundry_id = laundry["id"].as_str().unwrap().to_string();

    let completed = client
        .update_list_item(
            &list_id,
            &laundry_id,
            &json!({ "status": "completed" }),
            TOKEN,
        )
        .await
        .unwrap();
    assert_eq!(completed["status"], "completed");
    assert_eq!(completed["version"], 2);

    // Unfiltered fetch sees both items
    let full = client.get_list(&list_id, None, TOKEN).await.unwrap();
    assert_eq!(full["items"].as_array().unwrap().len(), 2);

    // Filtered fetches see one each
    let active = client
        .get_list(&list_id, Some(ItemStatus::Active), TOKEN)
        .await
        .unwrap();
    let active_items = active["items"].as_array().unwrap();
    assert_eq!(active_items.len(), 1);
    assert_eq!(active_items[0]["value"], "dishes");

    let done = client
        .get_list(&list_id, Some(ItemStatus::Completed), TOKEN)
        .await
        .unwrap();
    assert_eq!(done["items"].as_array().unwrap().len(), 1);

    // Fetch and delete a single item
    let fetched = client
        .get_list_item(&list_id, &laundry_id, TOKEN)
        .await
        .unwrap();
    assert_eq!(fetched["value"], "laundry");

    client
        .delete_list_item(&list_id, &laundry_id, TOKEN)
        .await
        .unwrap();
    let err = client
        .get_list_item(&list_id, &laundry_id, TOKEN)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    // The other item is untouched
    let dishes_id = dishes["id"].as_str().unwrap();
    client.get_list_item(&list_id, dishes_id, TOKEN).await.unwrap();

    server.shutdown().await;
}

// =============================================================================
// Fixture Tests
// =============================================================================

#[tokio::test]
async fn test_default_fixtures_filter_by_status() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let active = client
        .get_list("shopping-list-001", Some(ItemStatus::Active), TOKEN)
        .await
        .expect("Failed to get shopping list");
    assert_eq!(active["items"].as_array().unwrap().len(), 2);

    let completed = client
        .get_list("shopping-list-001", Some(ItemStatus::Completed), TOKEN)
        .await
        .expect("Failed to get shopping list");
    let completed_items = completed["items"].as_array().unwrap();
    assert_eq!(completed_items.len(), 1);
    assert_eq!(completed_items[0]["value"], "bread");

    server.shutdown().await;
}

#[tokio::test]
async fn test_custom_state_with_bulk_list() {
    let state = MockState::new()
        .with_list(Fixtures::empty_list("list-empty", "Empty"))
        .with_list(Fixtures::list_with_items("list-bulk", "Bulk", 10));

    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let metadata = client.get_lists_metadata(TOKEN).await.unwrap();
    assert_eq!(metadata["lists"].as_array().unwrap().len(), 2);

    let bulk = client.get_list("list-bulk", None, TOKEN).await.unwrap();
    assert_eq!(bulk["items"].as_array().unwrap().len(), 10);

    server.shutdown().await;
}

// =============================================================================
// Authorization Tests
// =============================================================================

#[tokio::test]
async fn test_required_token_is_enforced() {
    let state = MockState::new()
        .with_list(Fixtures::shopping_list())
        .with_required_token("good-token");

    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    // Right token passes
    client
        .get_lists_metadata("good-token")
        .await
        .expect("Expected the valid token to be accepted");

    // Wrong token is rejected; the client reports only the status and the
    // fixed message
    let err = client.get_lists_metadata("bad-token").await.unwrap_err();
    assert_eq!(err.status_code(), Some(403));
    assert_eq!(err.to_string(), "\"Error\"");

    server.shutdown().await;
}

// =============================================================================
// Validation Tests
// =============================================================================

#[tokio::test]
async fn test_unknown_status_filter_is_a_bad_request() {
    let server = MockServer::start().await;

    // The client's enum can't produce a bad filter, so drive the server
    // directly.
    let http = reqwest::Client::new();
    let response = http
        .get(format!(
            "{}/v2/householdlists/shopping-list-001?status=bogus",
            server.url()
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);

    server.shutdown().await;
}
