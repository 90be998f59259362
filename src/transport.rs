//! Pluggable HTTP transport.
//!
//! The client never talks to the network directly; it hands fully built
//! requests (URI, headers, optional JSON body) to an [`ApiTransport`] and
//! normalizes whatever comes back. [`HttpTransport`] is the reqwest-backed
//! implementation used by default; tests inject stubs.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{ListApiError, Result};

const USER_AGENT: &str = concat!("alexa-lists/", env!("CARGO_PKG_VERSION"));

/// Request headers as a plain name/value map.
pub type Headers = HashMap<String, String>;

/// Raw result of a transport call: the status code and the unparsed body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    /// True when the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// HTTP transport consumed by [`ListManagementClient`].
///
/// One method per verb, each resolving to an [`ApiResponse`] when the
/// server answered (whatever the status code) and erroring only when the
/// call itself failed. Custom implementations should report their failures
/// through [`ListApiError::Transport`].
///
/// [`ListManagementClient`]: crate::ListManagementClient
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, uri: &str, headers: &Headers) -> Result<ApiResponse>;

    async fn post(&self, uri: &str, headers: &Headers, body: &Value) -> Result<ApiResponse>;

    async fn put(&self, uri: &str, headers: &Headers, body: &Value) -> Result<ApiResponse>;

    async fn delete(&self, uri: &str, headers: &Headers) -> Result<ApiResponse>;
}

/// Production transport backed by [`reqwest::Client`].
///
/// Cheaply cloneable; clones reference the same underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build the transport with the crate's default client options.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(ListApiError::Http)?;

        Ok(Self { http })
    }

    async fn execute(
        &self,
        mut request: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> Result<ApiResponse> {
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(ListApiError::Http)?;
        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(ListApiError::Http)?;

        Ok(ApiResponse { status_code, body })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, uri: &str, headers: &Headers) -> Result<ApiResponse> {
        self.execute(self.http.get(uri), headers).await
    }

    async fn post(&self, uri: &str, headers: &Headers, body: &Value) -> Result<ApiResponse> {
        self.execute(self.http.post(uri).json(body), headers).await
    }

    async fn put(&self, uri: &str, headers: &Headers, body: &Value) -> Result<ApiResponse> {
        self.execute(self.http.put(uri).json(body), headers).await
    }

    async fn delete(&self, uri: &str, headers: &Headers) -> Result<ApiResponse> {
        self.execute(self.http.delete(uri), headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_success_range() {
        let ok = ApiResponse {
            status_code: 204,
            body: String::new(),
        };
        assert!(ok.is_success());

        let redirect = ApiResponse {
            status_code: 301,
            body: String::new(),
        };
        assert!(!redirect.is_success());

        let client_error = ApiResponse {
            status_code: 400,
            body: "Error".to_string(),
        };
        assert!(!client_error.is_success());
    }

    #[test]
    fn transport_builds() {
        assert!(HttpTransport::new().is_ok());
    }
}
