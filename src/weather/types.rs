//! Weather reading and upstream payload types.

use serde::{Deserialize, Serialize};

use crate::error::UpstreamError;

/// One fully parsed weather observation for a single city.
///
/// Constructed only from a successfully parsed upstream body; a payload
/// missing any required field surfaces as [`UpstreamError`] instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Localized weather description.
    pub description: String,
}

/// OpenWeather current-weather response body.
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    /// Temperature block.
    pub main: MainSection,
    /// Wind block.
    pub wind: WindSection,
    /// Condition list; the first entry carries the description.
    pub weather: Vec<ConditionSection>,
}

/// `main` block of the upstream payload.
#[derive(Debug, Deserialize)]
pub struct MainSection {
    /// Temperature in the requested units.
    pub temp: f64,
    /// Perceived temperature.
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
}

/// `wind` block of the upstream payload.
#[derive(Debug, Deserialize)]
pub struct WindSection {
    /// Wind speed in the requested units.
    pub speed: f64,
}

/// One `weather` list entry of the upstream payload.
#[derive(Debug, Deserialize)]
pub struct ConditionSection {
    /// Localized description of the condition.
    pub description: String,
}

impl WeatherReading {
    /// Map an upstream payload into a reading with explicit presence
    /// checks. An empty `weather` list is a missing-field error.
    pub fn from_payload(city: &str, payload: CurrentWeather) -> Result<Self, UpstreamError> {
        let condition =
            payload
                .weather
                .into_iter()
                .next()
                .ok_or_else(|| UpstreamError::MissingField {
                    city: city.to_string(),
                    field: "weather[0].description",
                })?;

        Ok(Self {
            temperature: payload.main.temp,
            feels_like: payload.main.feels_like,
            humidity: payload.main.humidity,
            wind_speed: payload.wind.speed,
            description: condition.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn payload(json: serde_json::Value) -> CurrentWeather {
        serde_json::from_value(json).expect("test payload should deserialize")
    }

    #[test]
    fn reading_mirrors_payload_fields() {
        let payload = payload(serde_json::json!({
            "main": { "temp": 21.5, "feels_like": 20.1, "humidity": 64 },
            "wind": { "speed": 3.2 },
            "weather": [ { "description": "ясно" } ]
        }));

        let reading = WeatherReading::from_payload("Moscow", payload).expect("complete payload");

        assert_eq!(reading.temperature, 21.5);
        assert_eq!(reading.feels_like, 20.1);
        assert_eq!(reading.humidity, 64);
        assert_eq!(reading.wind_speed, 3.2);
        assert_eq!(reading.description, "ясно");
    }

    #[test]
    fn first_condition_wins() {
        let payload = payload(serde_json::json!({
            "main": { "temp": 1.0, "feels_like": -2.0, "humidity": 90 },
            "wind": { "speed": 7.5 },
            "weather": [
                { "description": "снег" },
                { "description": "туман" }
            ]
        }));

        let reading = WeatherReading::from_payload("Kazan", payload).expect("complete payload");
        assert_eq!(reading.description, "снег");
    }

    #[test]
    fn empty_condition_list_is_missing_field() {
        let payload = payload(serde_json::json!({
            "main": { "temp": 1.0, "feels_like": 0.0, "humidity": 50 },
            "wind": { "speed": 1.0 },
            "weather": []
        }));

        let err = WeatherReading::from_payload("Moscow", payload).unwrap_err();
        assert!(matches!(
            err,
            UpstreamError::MissingField {
                field: "weather[0].description",
                ..
            }
        ));
    }

    #[test]
    fn missing_temp_fails_deserialization() {
        let result: Result<CurrentWeather, _> = serde_json::from_value(serde_json::json!({
            "main": { "feels_like": 20.1, "humidity": 64 },
            "wind": { "speed": 3.2 },
            "weather": [ { "description": "ясно" } ]
        }));

        assert!(result.is_err());
    }
}
