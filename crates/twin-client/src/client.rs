//! Twin HTTP client implementation

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Result, TwinClientError};
use crate::types::{ApiInfo, ErrorBody};
use twin_core::{CarState, CarStateInput, MetricsSnapshot};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Car twin REST API client
#[derive(Debug, Clone)]
pub struct TwinClient {
    client: Client,
    base_url: Url,
}

impl TwinClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the twin server (e.g., "http://localhost:3000")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    ///
    /// Useful for making custom requests (e.g. preflight checks in tests)
    /// while reusing the client's connection pool.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    // =========================================================================
    // Health Check
    // =========================================================================

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // Service Metadata
    // =========================================================================

    /// Describe the service: message, version and available endpoints
    #[instrument(skip(self))]
    pub async fn describe(&self) -> Result<ApiInfo> {
        let url = self.base_url.join("/api/")?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Car State Operations
    // =========================================================================

    /// Record a new car simulation state
    #[instrument(skip(self, input))]
    pub async fn create_state(&self, input: &CarStateInput) -> Result<CarState> {
        let url = self.base_url.join("/api/car-state")?;
        debug!(session_id = %input.session_id, "Submitting car state to {}", url);

        let response = self.client.post(url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// List recorded states in insertion order
    ///
    /// `session_id` narrows the list to one session; `limit` caps the number
    /// of returned records.
    #[instrument(skip(self))]
    pub async fn list_states(
        &self,
        session_id: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<CarState>> {
        let mut url = self.base_url.join("/api/car-state")?;
        if session_id.is_some() || limit.is_some() {
            let mut query = url.query_pairs_mut();
            if let Some(session_id) = session_id {
                query.append_pair("sessionId", session_id);
            }
            if let Some(limit) = limit {
                query.append_pair("limit", &limit.to_string());
            }
        }

        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Get one recorded state by id
    #[instrument(skip(self))]
    pub async fn get_state(&self, id: &str) -> Result<CarState> {
        let url = self.base_url.join(&format!("/api/car-state/{}", id))?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Get summary statistics over all recorded states
    #[instrument(skip(self))]
    pub async fn metrics(&self) -> Result<MetricsSnapshot> {
        let url = self.base_url.join("/api/metrics")?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Deserialize a successful response, or turn a failed one into an error
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        let status = response.status().as_u16();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            TwinClientError::ParseError(format!("status {}: {}: {}", status, e, body))
        })
    }

    /// Build a [`TwinClientError`] from a failed response, preferring the
    /// server's structured error body
    async fn extract_error(&self, response: Response) -> TwinClientError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) => TwinClientError::server_error(status, err.message),
            Err(_) => TwinClientError::server_error(status, body),
        }
    }
}
