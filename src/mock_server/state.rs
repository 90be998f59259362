//! Mock server state management.
//!
//! Provides the in-memory data store for the mock List Management API
//! server.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A household list held by the mock server.
///
/// Serializes with the same camelCase field names the live API uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockList {
    pub list_id: String,
    pub name: String,
    /// `"active"` or `"archived"`.
    pub state: String,
    pub version: u64,
    #[serde(default)]
    pub items: Vec<MockListItem>,
}

impl MockList {
    /// The list without its items, as returned by the metadata endpoint.
    pub fn metadata(&self) -> ListMetadata {
        ListMetadata {
            list_id: self.list_id.clone(),
            name: self.name.clone(),
            state: self.state.clone(),
            version: self.version,
        }
    }
}

/// A single entry in a household list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockListItem {
    pub id: String,
    pub value: String,
    /// `"active"` or `"completed"`.
    pub status: String,
    pub version: u64,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
}

/// Metadata view of a list (no items).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    pub list_id: String,
    pub name: String,
    pub state: String,
    pub version: u64,
}

/// Shared state for the mock server.
///
/// Holds all the mock data the server will serve, wrapped in
/// `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Lists indexed by list id.
    pub lists: HashMap<String, MockList>,

    /// Optional authentication token. If set, requests must carry it as a
    /// bearer token.
    pub required_token: Option<String>,

    /// Counter backing generated list and item ids.
    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a list to the state.
    pub fn with_list(mut self, list: MockList) -> Self {
        self.lists.insert(list.list_id.clone(), list);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Get a list by id.
    pub fn get_list(&self, list_id: &str) -> Option<&MockList> {
        self.lists.get(list_id)
    }

    /// Metadata for every list.
    pub fn lists_metadata(&self) -> Vec<ListMetadata> {
        self.lists.values().map(MockList::metadata).collect()
    }

    /// Create a list with a generated id and return it.
    pub fn create_list(&mut self, name: String, state: Option<String>) -> MockList {
        let list_id = format!("list-{}", self.fresh_id());
        let list = MockList {
            list_id: list_id.clone(),
            name,
            state: state.unwrap_or_else(|| "active".to_string()),
            version: 1,
            items: Vec::new(),
        };
        self.lists.insert(list_id, list.clone());
        list
    }

    /// Update a list's name and/or state, bumping its version.
    pub fn update_list(
        &mut self,
        list_id: &str,
        name: Option<String>,
        state: Option<String>,
    ) -> Option<MockList> {
        let list = self.lists.get_mut(list_id)?;
        if let Some(name) = name {
            list.name = name;
        }
        if let Some(state) = state {
            list.state = state;
        }
        list.version += 1;
        Some(list.clone())
    }

    /// Remove a list. Returns false if it did not exist.
    pub fn delete_list(&mut self, list_id: &str) -> bool {
        self.lists.remove(list_id).is_some()
    }

    /// Add an item to a list and return it. `None` if the list is unknown.
    pub fn create_item(
        &mut self,
        list_id: &str,
        value: String,
        status: Option<String>,
    ) -> Option<MockListItem> {
        let id = format!("item-{}", self.fresh_id());
        let list = self.lists.get_mut(list_id)?;
        let now = Utc::now();
        let item = MockListItem {
            id,
            value,
            status: status.unwrap_or_else(|| "active".to_string()),
            version: 1,
            created_time: now,
            updated_time: now,
        };
        list.items.push(item.clone());
        Some(item)
    }

    /// Get one item from a list.
    pub fn get_item(&self, list_id: &str, item_id: &str) -> Option<&MockListItem> {
        self.lists
            .get(list_id)?
            .items
            .iter()
            .find(|i| i.id == item_id)
    }

    /// Update an item's value and/or status, bumping its version.
    pub fn update_item(
        &mut self,
        list_id: &str,
        item_id: &str,
        value: Option<String>,
        status: Option<String>,
    ) -> Option<MockListItem> {
        let list = self.lists.get_mut(list_id)?;
        let item = list.items.iter_mut().find(|i| i.id == item_id)?;
        if let Some(value) = value {
            item.value = value;
        }
        if let Some(status) = status {
            item.status = status;
        }
        item.version += 1;
        item.updated_time = Utc::now();
        Some(item.clone())
    }

    /// Remove an item from a list. Returns false if list or item is
    /// unknown.
    pub fn delete_item(&mut self, list_id: &str, item_id: &str) -> bool {
        match self.lists.get_mut(list_id) {
            Some(list) => {
                let before = list.items.len();
                list.items.retain(|i| i.id != item_id);
                list.items.len() != before
            }
            None => false,
        }
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
