//! HTTP client for the Open-Meteo flood forecast API

use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;

use super::FloodApiResponse;

/// Hosted flood forecast endpoint
const FLOOD_API_URL: &str = "https://flood-api.open-meteo.com/v1/flood";

/// Daily statistics requested for every forecast
const DAILY_VARIABLES: [&str; 7] = [
    "river_discharge",
    "river_discharge_mean",
    "river_discharge_median",
    "river_discharge_max",
    "river_discharge_min",
    "river_discharge_p25",
    "river_discharge_p75",
];

/// Upstream ensemble the forecast is pinned to
const FORECAST_MODEL: &str = "seamless_v4";

/// Forecast horizon in days
const FORECAST_DAYS: u32 = 183;

/// Forecast client errors
#[derive(Debug, Error)]
pub enum FloodApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("failed to fetch {url} after {attempts} attempts")]
    RetriesExhausted { url: String, attempts: u32 },
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct FloodClientConfig {
    /// Endpoint to query (overridable for tests)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Max attempts per forecast fetch
    pub max_retries: u32,
    /// Initial backoff in milliseconds, doubled after each failed attempt
    pub backoff_ms: u64,
    /// Seconds a cached response stays fresh
    pub cache_ttl_secs: u64,
}

impl Default for FloodClientConfig {
    fn default() -> Self {
        Self {
            base_url: FLOOD_API_URL.to_string(),
            timeout_secs: 30,
            max_retries: 5,
            backoff_ms: 200,
            cache_ttl_secs: 3600,
        }
    }
}

struct CacheEntry {
    stored_at: Instant,
    response: FloodApiResponse,
}

/// Forecast client with retry, backoff, and response caching.
///
/// Handlers treat this as a black box with at-least-once delivery: a fetch
/// either returns a (possibly cached) parsed response or an error after the
/// retry budget is spent.
pub struct FloodClient {
    client: reqwest::Client,
    config: FloodClientConfig,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl FloodClient {
    /// Create a new client with the given configuration
    pub fn new(config: FloodClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Build the forecast URL for a coordinate pair
    fn build_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&daily={}&forecast_days={}&models={}",
            self.config.base_url,
            latitude,
            longitude,
            DAILY_VARIABLES.join(","),
            FORECAST_DAYS,
            FORECAST_MODEL,
        )
    }

    /// Fetch the forecast for a coordinate pair
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<FloodApiResponse, FloodApiError> {
        let url = self.build_url(latitude, longitude);

        if let Some(cached) = self.cache_lookup(&url).await {
            tracing::debug!("Forecast cache hit: {}", url);
            return Ok(cached);
        }

        let response = self.fetch_with_retry(&url).await?;
        self.cache_store(&url, response.clone()).await;
        Ok(response)
    }

    async fn cache_lookup(&self, url: &str) -> Option<FloodApiResponse> {
        let ttl = Duration::from_secs(self.config.cache_ttl_secs);
        let mut cache = self.cache.lock().await;
        match cache.get(url) {
            Some(entry) if entry.stored_at.elapsed() < ttl => Some(entry.response.clone()),
            Some(_) => {
                cache.remove(url);
                None
            }
            None => None,
        }
    }

    async fn cache_store(&self, url: &str, response: FloodApiResponse) {
        let mut cache = self.cache.lock().await;
        cache.insert(
            url.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                response,
            },
        );
    }

    /// Fetch and parse with retry and multiplicative backoff
    async fn fetch_with_retry(&self, url: &str) -> Result<FloodApiResponse, FloodApiError> {
        for attempt in 0..self.config.max_retries {
            match self.client.get(url).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return response
                            .json::<FloodApiResponse>()
                            .await
                            .map_err(FloodApiError::RequestFailed);
                    }
                    tracing::warn!(
                        "Forecast request failed with status {} (attempt {}/{})",
                        response.status(),
                        attempt + 1,
                        self.config.max_retries
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Forecast request failed (attempt {}/{}): {}",
                        attempt + 1,
                        self.config.max_retries,
                        e
                    );
                }
            }

            if attempt + 1 < self.config.max_retries {
                let backoff = Duration::from_millis(self.config.backoff_ms * (1u64 << attempt));
                tokio::time::sleep(backoff).await;
            }
        }

        Err(FloodApiError::RetriesExhausted {
            url: url.to_string(),
            attempts: self.config.max_retries,
        })
    }
}
