//! HTTP API handlers.

use axum::{extract::State, response::Html, Json};
use chrono::Utc;
use futures::future::join_all;
use serde::Serialize;
use tracing::warn;

use crate::metrics;
use crate::registry;
use crate::state::AppState;

use super::templates::{CityEntry, WeatherPage, WeatherRow};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Whether the weather client is initialized.
    pub weather_service: bool,
    /// Current time, RFC 3339.
    pub timestamp: String,
}

/// City list response.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    /// Monitored city identifiers, in registry order.
    pub cities: Vec<String>,
}

/// Render the weather page for all monitored cities.
///
/// Per-city fetches run concurrently; entries are emitted in registry
/// order regardless of completion order. An upstream failure becomes an
/// inline error entry and never aborts the render.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut entries = Vec::new();

    if let Some(client) = state.weather().await {
        let cities = state.registry().monitored();
        let results = join_all(cities.iter().map(|city| client.fetch_by_city(city))).await;

        let recorded_at = Utc::now()
            .with_timezone(&state.display_tz())
            .format("%d.%m.%Y %H:%M")
            .to_string();

        for (city, result) in cities.iter().zip(results) {
            match result {
                Ok(reading) => entries.push(CityEntry::Weather(WeatherRow {
                    name: state.registry().display_name(city).to_string(),
                    temperature: reading.temperature,
                    humidity: reading.humidity,
                    description: reading.description,
                    wind_speed: reading.wind_speed,
                    country: registry::COUNTRY_CODE,
                    recorded_at: recorded_at.clone(),
                })),
                Err(e) => {
                    warn!(city = %city, "weather fetch failed: {e}");
                    entries.push(CityEntry::Error(e.to_string()));
                }
            }
        }
    }

    metrics::inc_page_renders();

    let page = WeatherPage {
        entries,
        db_enabled: state.database_enabled().await,
    };

    Html(page.render_page())
}

/// Health check handler. Reflects local component presence only; never
/// calls upstream.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        weather_service: state.weather().await.is_some(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// City list handler. Returns the monitored list verbatim.
pub async fn cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: state
            .registry()
            .monitored()
            .iter()
            .map(|c| c.to_string())
            .collect(),
    })
}
