//! WakaTime-compatible summaries API client.
//!
//! Provides:
//! - [`Client`]: authenticated access to `users/current/summaries`
//! - [`SummaryFilters`]: the query parameters the endpoint accepts
//! - [`credentials`]: API key discovery from `~/.wakatime.cfg`

pub mod credentials;
mod filters;

use std::fmt;
use std::future::Future;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use ht_core::SummaryResponse;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use serde::Deserialize;
use thiserror::Error;

pub use filters::SummaryFilters;

/// Default API root (Hackatime's WakaTime compatibility layer).
pub const DEFAULT_API_URL: &str = "https://waka.hackclub.com/api/compat/wakatime/v1";

/// Default request timeout for API calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SUMMARIES_PATH: &str = "users/current/summaries";

/// API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provided API key was invalid.
    #[error("invalid API key: {reason}")]
    InvalidApiKey { reason: &'static str },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    /// Failed to parse response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Connection settings for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API root, e.g. `https://wakatime.com/api/v1`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A source of raw summary responses.
///
/// This is the boundary between the network and everything that consumes
/// summaries; tests substitute in-memory implementations.
pub trait SummarySource {
    /// Fetches the summaries matching `filters`.
    fn fetch(
        &self,
        filters: &SummaryFilters,
    ) -> impl Future<Output = Result<SummaryResponse, ApiError>> + Send;
}

/// Summaries API client.
///
/// # Thread Safety
///
/// The client is safe to clone and share across threads. Each clone shares
/// the underlying HTTP connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    authorization: HeaderValue,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or whitespace-only, or if
    /// the HTTP client fails to build.
    pub fn new(api_key: impl Into<String>, options: ClientOptions) -> Result<Self, ApiError> {
        let api_key = api_key.into();

        // Validate API key
        if api_key.is_empty() {
            return Err(ApiError::InvalidApiKey {
                reason: "API key cannot be empty",
            });
        }
        if api_key.trim().is_empty() {
            return Err(ApiError::InvalidApiKey {
                reason: "API key cannot be whitespace-only",
            });
        }

        let mut authorization =
            HeaderValue::from_str(&format!("Basic {}", BASE64.encode(api_key.trim())))
                .map_err(|_| ApiError::InvalidApiKey {
                    reason: "API key contains invalid characters",
                })?;
        authorization.set_sensitive(true);

        // Build HTTP client with timeout
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            authorization,
        })
    }

    /// Full URL of the summaries endpoint, without query.
    pub fn summaries_url(&self) -> String {
        format!("{}/{SUMMARIES_PATH}", self.base_url)
    }

    /// Builds the summaries request without sending it.
    pub fn summaries_request(&self, filters: &SummaryFilters) -> Result<reqwest::Request, ApiError> {
        let request = self
            .http
            .get(self.summaries_url())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.authorization.clone())
            .query(&filters.query_pairs())
            .build()?;
        Ok(request)
    }

    /// Fetches summaries matching `filters`.
    pub async fn summaries(&self, filters: &SummaryFilters) -> Result<SummaryResponse, ApiError> {
        let request = self.summaries_request(filters)?;
        tracing::debug!(url = %request.url(), "fetching summaries");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Api {
                status,
                message: parse_error_message(&body).unwrap_or(body),
            });
        }

        let summaries: SummaryResponse = serde_json::from_str(&body)
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))?;
        tracing::debug!(
            records = summaries.data.as_ref().map_or(0, Vec::len),
            "received summaries"
        );
        Ok(summaries)
    }
}

impl SummarySource for Client {
    fn fetch(
        &self,
        filters: &SummaryFilters,
    ) -> impl Future<Output = Result<SummaryResponse, ApiError>> + Send {
        self.summaries(filters)
    }
}

/// Extracts the human-readable message from an error body.
///
/// WakaTime reports `{"error": "..."}`; some compatible servers use `message`.
fn parse_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorPayload {
        error: Option<String>,
        message: Option<String>,
    }

    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.error.or(payload.message))
}
