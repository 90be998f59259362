//! Mock List Management API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! household-list API for integration and end-to-end testing. Unlike
//! wiremock which mocks at the HTTP level per-test, this server maintains
//! state across requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use alexa_lists::mock_server::MockServer;
//! use alexa_lists::ListManagementClient;
//! use serde_json::json;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let mut client = ListManagementClient::new().unwrap();
//!     client.set_api_endpoint(server.url());
//!
//!     // Server comes with default fixtures
//!     let list = client
//!         .get_list("shopping-list-001", None, "test-token")
//!         .await
//!         .unwrap();
//!     assert_eq!(list["name"], "Shopping List");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{ListMetadata, MockList, MockListItem, MockState};
