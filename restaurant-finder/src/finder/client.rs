//! HTTP client for the restaurant filter API.

use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::domain::RestaurantRecord;
use crate::filter::QueryPayload;

use super::RestaurantSource;
use super::error::FinderError;

/// Default base URL for the restaurant filter API.
pub const DEFAULT_BASE_URL: &str = "https://recommended-restaurant-1-0.onrender.com";

/// Path of the filter endpoint, relative to the base URL.
const FILTER_PATH: &str = "/api/restaurants/filter";

/// How much of an unparseable body to keep for the error message.
const BODY_PREVIEW_CHARS: usize = 500;

/// Configuration for the finder client.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Base URL for the API (defaults to the hosted service)
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves it to the transport
    pub timeout_secs: Option<u64>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl FinderConfig {
    /// Set a custom base URL (for testing or a local deployment).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Full URL of the filter endpoint.
    pub fn filter_url(&self) -> String {
        format!("{}{}", self.base_url, FILTER_PATH)
    }
}

/// Restaurant filter API client.
#[derive(Debug, Clone)]
pub struct FinderClient {
    http: reqwest::Client,
    filter_url: String,
}

impl FinderClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FinderConfig) -> Result<Self, FinderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            filter_url: config.filter_url(),
        })
    }

    /// Ask the API for every restaurant matching `payload`.
    ///
    /// Any non-2xx status is an error, as is a body that is not a JSON
    /// array of restaurants.
    pub async fn filter(
        &self,
        payload: &QueryPayload,
    ) -> Result<Vec<RestaurantRecord>, FinderError> {
        debug!(url = %self.filter_url, ?payload, "querying restaurant filter API");

        // `.json()` sets `Content-Type: application/json`
        let response = self.http.post(&self.filter_url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "restaurant filter API returned an error");
            return Err(FinderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let records: Vec<RestaurantRecord> =
            serde_json::from_str(&body).map_err(|e| FinderError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_PREVIEW_CHARS).collect()),
            })?;

        debug!(count = records.len(), "restaurant filter API responded");
        Ok(records)
    }
}

impl RestaurantSource for FinderClient {
    fn search<'a>(
        &'a self,
        payload: &'a QueryPayload,
    ) -> BoxFuture<'a, Result<Vec<RestaurantRecord>, FinderError>> {
        Box::pin(self.filter(payload))
    }
}
