//! Askama templates for the weather page.

use askama::Template;

/// The rendered weather page.
#[derive(Template)]
#[template(path = "weather.html")]
pub struct WeatherPage {
    /// One entry per monitored city, in registry order.
    pub entries: Vec<CityEntry>,
    /// Whether persistence is enabled.
    pub db_enabled: bool,
}

/// One city slot on the page: a reading or an inline error.
pub enum CityEntry {
    /// Successfully fetched weather.
    Weather(WeatherRow),
    /// Upstream failure for this city.
    Error(String),
}

/// Display fields for one city's weather.
pub struct WeatherRow {
    /// City display name.
    pub name: String,
    /// Temperature in °C.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Localized weather description.
    pub description: String,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Country code.
    pub country: &'static str,
    /// Render timestamp in the display timezone.
    pub recorded_at: String,
}

impl WeatherPage {
    /// Render to HTML, degrading to a plain error string if the template
    /// engine fails.
    pub fn render_page(self) -> String {
        self.render().unwrap_or_else(|e| {
            tracing::error!("template rendering error: {e}");
            format!("Template error: {e}")
        })
    }
}
