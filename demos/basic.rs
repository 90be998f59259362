//! Basic example demonstrating the List Management client.
//!
//! Run with:
//! ```
//! ALEXA_ACCESS_TOKEN=your-token cargo run --example basic
//! ```
//!
//! The token is the household-scoped access token your skill receives with
//! each request (`context.System.apiAccessToken`).

use alexa_lists::{ItemStatus, ListManagementClient};
use serde_json::json;

#[tokio::main]
async fn main() -> alexa_lists::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let token = std::env::var("ALEXA_ACCESS_TOKEN")
        .expect("ALEXA_ACCESS_TOKEN environment variable not set");

    let client = ListManagementClient::new()?;
    println!("Talking to: {}", client.api_endpoint());

    // List all of the household's lists
    println!("\n--- Lists Metadata ---");
    let metadata = client.get_lists_metadata(&token).await?;
    let lists = metadata["lists"].as_array().cloned().unwrap_or_default();
    println!("Found {} lists", lists.len());

    for list in &lists {
        println!(
            "  - {} ({}, {})",
            list["name"], list["listId"], list["state"]
        );
    }

    // Create a list and put something on it
    println!("\n--- Creating a List ---");
    let created = client
        .create_list(&json!({ "name": "Groceries", "state": "active" }), &token)
        .await?;
    let list_id = created["listId"].as_str().unwrap_or_default().to_string();
    println!("Created list {list_id}");

    let item = client
        .create_list_item(&list_id, &json!({ "value": "milk" }), &token)
        .await?;
    println!("Added item {}", item["id"]);

    // Read it back, active items only
    println!("\n--- Active Items ---");
    let active = client
        .get_list(&list_id, Some(ItemStatus::Active), &token)
        .await?;
    for entry in active["items"].as_array().cloned().unwrap_or_default() {
        println!("  - {} [{}]", entry["value"], entry["status"]);
    }

    // Clean up
    println!("\n--- Cleaning Up ---");
    client.delete_list(&list_id, &token).await?;
    println!("Deleted list {list_id}");

    println!("\nDone!");
    Ok(())
}
