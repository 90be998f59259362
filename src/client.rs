//! List Management API client.
//!
//! Builds the request for each list and list-item operation, hands it to
//! the injected transport, and normalizes the outcome.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ListApiError, Result};
use crate::transport::{ApiResponse, ApiTransport, Headers, HttpTransport};

const DEFAULT_API_ENDPOINT: &str = "https://api.amazonalexa.com";
const LISTS_PATH: &str = "/v2/householdlists/";

/// Message carried by every non-2xx failure: the JSON-encoded string
/// `Error`. The response body is discarded; only the status code tells
/// failures apart.
// TODO: surface the response body in the message once callers that match
// on the fixed string have been audited.
const GENERIC_ERROR_MESSAGE: &str = "\"Error\"";

/// Status filter for fetching a list's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Completed,
}

impl ItemStatus {
    /// The wire form used in the `status` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for the Alexa List Management API.
///
/// Each operation issues exactly one request and resolves with the decoded
/// response body, or fails with a [`ListApiError`]. The bearer token is
/// supplied per call and never stored; the API endpoint is the only state
/// shared between calls.
///
/// # Example
///
/// ```no_run
/// use alexa_lists::ListManagementClient;
/// use serde_json::json;
///
/// # async fn example(token: &str) -> alexa_lists::Result<()> {
/// let client = ListManagementClient::new()?;
/// let metadata = client.get_lists_metadata(token).await?;
/// client
///     .create_list(&json!({ "name": "Groceries", "state": "active" }), token)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ListManagementClient {
    transport: Arc<dyn ApiTransport>,
    api_endpoint: String,
}

impl fmt::Debug for ListManagementClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListManagementClient")
            .field("api_endpoint", &self.api_endpoint)
            .finish_non_exhaustive()
    }
}

impl ListManagementClient {
    /// Create a client backed by the default [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?)))
    }

    /// Create a client with an injected transport.
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
        }
    }

    /// Get the current API endpoint.
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Replace the API endpoint for all subsequent calls.
    ///
    /// The value is taken as-is; no validation is performed. Requests
    /// already built keep the endpoint they were built with.
    pub fn set_api_endpoint(&mut self, api_endpoint: impl Into<String>) {
        self.api_endpoint = api_endpoint.into();
    }

    /// Fetch metadata for all of the household's lists.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_lists_metadata(&self, token: &str) -> Result<Value> {
        let uri = self.lists_uri();
        let response = self.transport.get(&uri, &build_headers(token)).await?;
        dispatch(response)
    }

    /// Create a new list from the given payload.
    #[tracing::instrument(skip(self, list, token))]
    pub async fn create_list<B>(&self, list: &B, token: &str) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let uri = self.lists_uri();
        let body = serde_json::to_value(list)?;
        let response = self
            .transport
            .post(&uri, &build_headers(token), &body)
            .await?;
        dispatch(response)
    }

    /// Fetch one list, optionally filtering its items by status.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_list(
        &self,
        list_id: &str,
        status: Option<ItemStatus>,
        token: &str,
    ) -> Result<Value> {
        let mut uri = self.list_uri(list_id);
        if let Some(status) = status {
            uri.push_str("?status=");
            uri.push_str(status.as_str());
        }
        let response = self.transport.get(&uri, &build_headers(token)).await?;
        dispatch(response)
    }

    /// Replace a list with the given payload.
    #[tracing::instrument(skip(self, list, token))]
    pub async fn update_list<B>(&self, list_id: &str, list: &B, token: &str) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let uri = self.list_uri(list_id);
        let body = serde_json::to_value(list)?;
        let response = self
            .transport
            .put(&uri, &build_headers(token), &body)
            .await?;
        dispatch(response)
    }

    /// Remove a list.
    #[tracing::instrument(skip(self, token))]
    pub async fn delete_list(&self, list_id: &str, token: &str) -> Result<Value> {
        let uri = self.list_uri(list_id);
        let response = self.transport.delete(&uri, &build_headers(token)).await?;
        dispatch(response)
    }

    /// Add an item to a list.
    #[tracing::instrument(skip(self, item, token))]
    pub async fn create_list_item<B>(&self, list_id: &str, item: &B, token: &str) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let uri = self.items_uri(list_id);
        let body = serde_json::to_value(item)?;
        let response = self
            .transport
            .post(&uri, &build_headers(token), &body)
            .await?;
        dispatch(response)
    }

    /// Fetch one item from a list.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_list_item(&self, list_id: &str, item_id: &str, token: &str) -> Result<Value> {
        let uri = self.item_uri(list_id, item_id);
        let response = self.transport.get(&uri, &build_headers(token)).await?;
        dispatch(response)
    }

    /// Replace an item with the given payload.
    #[tracing::instrument(skip(self, item, token))]
    pub async fn update_list_item<B>(
        &self,
        list_id: &str,
        item_id: &str,
        item: &B,
        token: &str,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let uri = self.item_uri(list_id, item_id);
        let body = serde_json::to_value(item)?;
        let response = self
            .transport
            .put(&uri, &build_headers(token), &body)
            .await?;
        dispatch(response)
    }

    /// Remove an item from a list.
    #[tracing::instrument(skip(self, token))]
    pub async fn delete_list_item(
        &self,
        list_id: &str,
        item_id: &str,
        token: &str,
    ) -> Result<Value> {
        let uri = self.item_uri(list_id, item_id);
        let response = self.transport.delete(&uri, &build_headers(token)).await?;
        dispatch(response)
    }

    fn lists_uri(&self) -> String {
        format!("{}{}", self.api_endpoint, LISTS_PATH)
    }

    fn list_uri(&self, list_id: &str) -> String {
        format!(
            "{}{}{}",
            self.api_endpoint,
            LISTS_PATH,
            urlencoding::encode(list_id)
        )
    }

    fn items_uri(&self, list_id: &str) -> String {
        format!("{}/items", self.list_uri(list_id))
    }

    fn item_uri(&self, list_id: &str, item_id: &str) -> String {
        format!("{}/{}", self.items_uri(list_id), urlencoding::encode(item_id))
    }
}

fn build_headers(token: &str) -> Headers {
    Headers::from([("Authorization".to_string(), format!("Bearer {token}"))])
}

/// Resolve a transport response: decoded body on 2xx, [`ListApiError::Api`]
/// otherwise.
fn dispatch(response: ApiResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(ListApiError::Api {
            status_code: response.status_code,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        });
    }
    Ok(parse_body(response.body))
}

/// Decode a response body without imposing a schema: JSON when it parses,
/// the raw string when it does not, `Null` when empty.
fn parse_body(body: String) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}
