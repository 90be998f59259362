//! Alexa List Management API client library.
//!
//! A Rust library for the household-list endpoints of the Alexa REST API:
//! list and list-item CRUD, bearer-token authentication, and a configurable
//! API endpoint. Skill backends receive a short-lived access token with
//! each request and pass it to every call here; the client never stores it.
//!
//! # Quick Start
//!
//! ```no_run
//! use alexa_lists::{ItemStatus, ListManagementClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> alexa_lists::Result<()> {
//!     let token = std::env::var("ALEXA_ACCESS_TOKEN").unwrap();
//!     let client = ListManagementClient::new()?;
//!
//!     // Metadata for every list in the household
//!     let metadata = client.get_lists_metadata(&token).await?;
//!     println!("lists: {metadata}");
//!
//!     // Create a list and add an item to it
//!     let list = client
//!         .create_list(&json!({ "name": "Groceries", "state": "active" }), &token)
//!         .await?;
//!     let list_id = list["listId"].as_str().unwrap().to_string();
//!     client
//!         .create_list_item(&list_id, &json!({ "value": "milk" }), &token)
//!         .await?;
//!
//!     // Fetch it back, active items only
//!     let active = client
//!         .get_list(&list_id, Some(ItemStatus::Active), &token)
//!         .await?;
//!     println!("active: {active}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! [`ListManagementClient`] owns request construction and response
//! normalization; actual network I/O lives behind the [`ApiTransport`]
//! trait. The default transport is reqwest-backed ([`HttpTransport`]), and
//! tests inject stubs — no network required.
//!
//! Response bodies are returned as raw [`serde_json::Value`]s without
//! schema validation, mirroring the wire contract.
//!
//! # Testing against the mock server
//!
//! With the `test-server` feature enabled, [`mock_server::MockServer`]
//! serves an in-memory implementation of all nine endpoints, for workflow
//! tests that span multiple requests.

mod client;
mod error;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{ItemStatus, ListManagementClient};
pub use error::{ListApiError, Result};
pub use transport::{ApiResponse, ApiTransport, Headers, HttpTransport};
