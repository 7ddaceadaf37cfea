//! Moorline HTTP Client
//!
//! A type-safe HTTP client for the Moorline control plane API.
//!
//! Pipelines on the control plane are scoped to teams, so the client hands out
//! per-team handles: [`ControlPlaneClient::team`] returns a [`TeamHandle`]
//! whose methods operate on that team's pipelines.
//!
//! Consumers that want to swap in a different transport (or a test double)
//! program against the [`ControlPlane`] and [`TeamPipelines`] traits instead
//! of the concrete types.
//!
//! # Example
//!
//! ```no_run
//! use moorline_client::{ControlPlaneClient, TeamPipelines};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ControlPlaneClient::new("http://localhost:8080");
//!
//!     // Look up a pipeline in the "main" team
//!     let team = client.team("main");
//!     if let Some(pipeline) = team.get_pipeline("ci").await? {
//!         println!("{} (paused: {})", pipeline.name, pipeline.is_paused);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod pipelines;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use pipelines::{CONFIG_VERSION_HEADER, TeamHandle, TeamPipelines};

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for the Moorline control plane API
///
/// The client itself only knows how to reach the control plane and
/// authenticate against it; all pipeline operations live on [`TeamHandle`],
/// obtained via [`ControlPlaneClient::team`].
#[derive(Debug, Clone)]
pub struct ControlPlaneClient {
    /// Base URL of the control plane (e.g., "http://localhost:8080")
    base_url: String,
    /// Bearer token sent with every request, if configured
    auth_token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl ControlPlaneClient {
    /// Create a new control plane client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the control plane API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use moorline_client::ControlPlaneClient;
    ///
    /// let client = ControlPlaneClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: None,
            client: Client::new(),
        }
    }

    /// Create a new control plane client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the control plane API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use moorline_client::ControlPlaneClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ControlPlaneClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: None,
            client,
        }
    }

    /// Attach a bearer token that will be sent with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Get the base URL of the control plane
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a handle scoped to one team's pipelines
    ///
    /// # Arguments
    /// * `team_name` - The team that owns the pipelines
    pub fn team(&self, team_name: impl Into<String>) -> TeamHandle {
        TeamHandle::new(self.clone(), team_name)
    }

    /// Start building a request with authentication applied
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response where 404 means "not found" rather than failure
    async fn handle_optional_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.handle_response(response).await.map(Some)
    }

    /// Handle an API response where the caller only needs to know whether the
    /// pipeline was there (e.g., pause/expose toggles, DELETE)
    async fn handle_found_response(&self, response: reqwest::Response) -> Result<bool> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(true)
    }
}

/// Access to the control plane, abstracted for dependency injection
///
/// [`ControlPlaneClient`] implements this over HTTP; tests implement it with
/// in-memory fakes. Code that reconciles pipelines takes a `ControlPlane`
/// rather than constructing its own client.
pub trait ControlPlane: Send + Sync {
    /// The per-team handle type handed out by this control plane
    type Team: TeamPipelines;

    /// Get a handle scoped to one team's pipelines
    fn team(&self, team_name: &str) -> Self::Team;
}

impl ControlPlane for ControlPlaneClient {
    type Team = TeamHandle;

    fn team(&self, team_name: &str) -> TeamHandle {
        ControlPlaneClient::team(self, team_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ControlPlaneClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ControlPlaneClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = ControlPlaneClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_team_handle_carries_team_name() {
        let client = ControlPlaneClient::new("http://localhost:8080");
        let team = client.team("main");
        assert_eq!(team.team_name(), "main");
    }
}
