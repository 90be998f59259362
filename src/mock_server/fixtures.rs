//! Canned data for the mock List Management API server.

use chrono::{TimeZone, Utc};

use super::state::{MockList, MockListItem};

/// Factory for mock lists and items.
pub struct Fixtures;

impl Fixtures {
    /// A list with no items.
    pub fn empty_list(list_id: &str, name: &str) -> MockList {
        MockList {
            list_id: list_id.to_string(),
            name: name.to_string(),
            state: "active".to_string(),
            version: 1,
            items: Vec::new(),
        }
    }

    /// A single item with the given status.
    pub fn item(id: &str, value: &str, status: &str) -> MockListItem {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        MockListItem {
            id: id.to_string(),
            value: value.to_string(),
            status: status.to_string(),
            version: 1,
            created_time: created,
            updated_time: created,
        }
    }

    /// A shopping list holding a mix of active and completed items.
    pub fn shopping_list() -> MockList {
        let mut list = Self::empty_list("shopping-list-001", "Shopping List");
        list.items = vec![
            Self::item("item-milk", "milk", "active"),
            Self::item("item-eggs", "eggs", "active"),
            Self::item("item-bread", "bread", "completed"),
        ];
        list
    }

    /// A list with `count` generated active items.
    pub fn list_with_items(list_id: &str, name: &str, count: usize) -> MockList {
        let mut list = Self::empty_list(list_id, name);
        list.items = (1..=count)
            .map(|i| Self::item(&format!("item-{i}"), &format!("entry {i}"), "active"))
            .collect();
        list
    }

    /// The data a freshly started server holds: a stocked shopping list
    /// and an empty to-do list.
    pub fn default_scenario() -> Vec<MockList> {
        vec![
            Self::shopping_list(),
            Self::empty_list("todo-list-001", "To-Do List"),
        ]
    }
}
