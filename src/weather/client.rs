//! OpenWeather API client.

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{LifecycleError, UpstreamError};
use crate::metrics;

use super::types::{CurrentWeather, WeatherReading};

/// Units requested from the upstream API.
const UNITS: &str = "metric";
/// Language of the returned weather descriptions.
const LANG: &str = "ru";

/// Client for the OpenWeather current-weather endpoint.
///
/// Owns a pooled HTTP client with bounded timeouts; one instance lives for
/// the process lifetime and is dropped exactly once at shutdown.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    /// HTTP client for upstream requests.
    http: reqwest::Client,
    /// Upstream API key.
    api_key: String,
    /// Base URL of the current-weather API.
    base_url: String,
}

impl WeatherClient {
    /// Create a new client from config.
    pub fn new(config: &Config) -> Result<Self, LifecycleError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.upstream_timeout_ms))
            .connect_timeout(Duration::from_millis(500))
            .build()
            .map_err(LifecycleError::ClientBuild)?;

        Ok(Self {
            http,
            api_key: config.openweather_api_key.clone(),
            base_url: config.openweather_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Log readiness. Does not contact the network.
    pub async fn initialize(&self) {
        info!("weather client initialized");
    }

    /// Log teardown. The pooled connections are released on drop.
    pub async fn shutdown(&self) {
        info!("weather client stopped");
    }

    /// Fetch the current weather for one city.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherReading, UpstreamError> {
        let url = format!("{}/weather", self.base_url);
        let started = Instant::now();

        let result = self.fetch_inner(&url, city).await;

        metrics::record_fetch_latency(started);
        metrics::inc_fetches();
        if result.is_err() {
            metrics::inc_fetch_failures();
        }

        result
    }

    async fn fetch_inner(&self, url: &str, city: &str) -> Result<WeatherReading, UpstreamError> {
        let response = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                city: city.to_string(),
                status: status.as_u16(),
            });
        }

        let payload: CurrentWeather =
            response.json().await.map_err(|e| UpstreamError::Malformed {
                city: city.to_string(),
                reason: e.to_string(),
            })?;

        let reading = WeatherReading::from_payload(city, payload)?;
        debug!(temperature = reading.temperature, "fetched weather");

        Ok(reading)
    }
}
