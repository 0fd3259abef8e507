//! Armorvox API client.

use std::time::{Duration, Instant};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::error::{Error, Result};
use crate::request::ApiRequest;

/// Default Armorvox server endpoint.
pub const DEFAULT_SERVER: &str = "http://localhost:9005/v8";

/// Default group name sent in the Authorization header.
pub const DEFAULT_GROUP: &str = "my_group";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Armorvox API client.
///
/// Sends a built [`ApiRequest`] to the configured server and returns the
/// raw response. Server-reported errors travel in the response body;
/// non-2xx statuses are returned for display, not raised.
///
/// # Example
///
/// ```rust,no_run
/// use armorvox::Client;
///
/// let client = Client::builder()
///     .server("https://armorvox.example.com/v8")
///     .group("my_group")
///     .build()?;
/// # Ok::<(), armorvox::Error>(())
/// ```
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    server: String,
    group: String,
}

/// Raw response from the server.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text, typically JSON.
    pub body: String,
    /// Round trip time of the request.
    pub elapsed: Duration,
}

impl ApiResponse {
    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Client {
    /// Creates a client with the default server and group.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configured server base URL.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Returns the configured group name.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the fully qualified URL for a built request.
    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.server, request.path)
    }

    /// Executes a single API request and collects the response.
    ///
    /// The body, when present, is serialized compactly; display formatting
    /// is the caller's concern.
    pub async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(request);

        let mut builder = match request.method {
            "GET" => self.http.get(&url),
            "POST" => self.http.post(&url),
            "PUT" => self.http.put(&url),
            "DELETE" => self.http.delete(&url),
            other => return Err(Error::Config(format!("unsupported method: {other}"))),
        };

        builder = builder.header(AUTHORIZATION, self.group.as_str());

        if let Some(body) = &request.body {
            let serialized = serde_json::to_string(body)?;
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serialized);
        }

        debug!("{} {}", request.method, url);
        let start = Instant::now();
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let elapsed = start.elapsed();
        debug!(status, elapsed_ms = elapsed.as_millis() as u64, "response received");

        Ok(ApiResponse {
            status,
            body,
            elapsed,
        })
    }
}

/// Builder for creating an Armorvox API client.
pub struct ClientBuilder {
    server: String,
    group: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new client builder with defaults.
    pub fn new() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            group: DEFAULT_GROUP.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the server base URL, scheme and base path included.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    /// Sets the group name used as the Authorization header value.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.server.is_empty() {
            return Err(Error::Config("server must be non-empty".to_string()));
        }

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(Client {
            http,
            server: self.server,
            group: self.group,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let client = Client::new().unwrap();
        assert_eq!(client.server(), DEFAULT_SERVER);
        assert_eq!(client.group(), DEFAULT_GROUP);
    }

    #[test]
    fn empty_server_is_rejected() {
        let err = Client::builder().server("").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn url_joins_server_base_and_path() {
        let client = Client::builder()
            .server("https://example.com/v8")
            .build()
            .unwrap();
        let request = ApiRequest {
            method: "GET",
            path: "/health".to_string(),
            body: None,
        };
        assert_eq!(client.url_for(&request), "https://example.com/v8/health");
    }
}
