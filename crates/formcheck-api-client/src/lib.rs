//! Shared HTTP client for the Formcheck API.
//!
//! Provides a minimal client with generic GET/multipart-POST helpers and the
//! domain methods for submitting workout videos (see [`api`]). The CLI uses
//! this client directly.
//!
//! Failures are never swallowed: every transport error and non-success HTTP
//! status is logged and then returned to the caller.

pub mod api;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Fixed path segment for exercise analysis submissions.
pub const EXERCISE_ANALYSIS_PATH: &str = "/exercise-analysis";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// HTTP client for the Formcheck API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: FORMCHECK_API_URL (or API_URL).
    /// Falls back to the local development server.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("FORMCHECK_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Failed to send request");
                return Err(e).context("Failed to send request");
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(url = %url, %status, "API request failed");
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        let body: T = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }

    /// POST multipart form and deserialize the response.
    ///
    /// The form is sent as `multipart/form-data` with no further encoding or
    /// transformation. On success the backend's body is returned unmodified
    /// apart from JSON deserialization into `T`.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.build_url(path);
        let response = match self.client.post(&url).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Failed to send request");
                return Err(e).context("Failed to send request");
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(url = %url, %status, "API request failed");
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        tracing::info!(url = %url, %status, "Data submitted successfully");

        let body: T = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }

    /// Raw client for custom requests.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

// Re-export the payload type and response models for convenience.
pub use api::VideoPayload;
pub use formcheck_core::models::{AnalysisResponse, ApiMessage};
