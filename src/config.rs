//! Application configuration loaded from environment variables.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::ConfigError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Upstream Credentials ===
    /// OpenWeather API key.
    pub openweather_api_key: String,

    // === Upstream Configuration ===
    /// Base URL of the OpenWeather current-weather API.
    #[serde(default = "default_api_url")]
    pub openweather_api_url: String,

    /// Upstream request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub upstream_timeout_ms: u64,

    // === Display ===
    /// IANA timezone used for timestamps on the rendered page.
    #[serde(default = "default_display_timezone")]
    pub display_timezone: String,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_api_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_display_timezone() -> String {
    "Europe/Moscow".to_string()
}

fn default_port() -> u16 {
    8083
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.openweather_api_key.is_empty() {
            return Err(ConfigError::MissingCredential);
        }

        self.display_tz()?;

        Ok(())
    }

    /// Parse the configured display timezone.
    pub fn display_tz(&self) -> Result<Tz, ConfigError> {
        self.display_timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(self.display_timezone.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_config() -> Config {
        Config {
            openweather_api_key: "test-key".to_string(),
            openweather_api_url: default_api_url(),
            upstream_timeout_ms: default_timeout_ms(),
            display_timezone: default_display_timezone(),
            port: default_port(),
        }
    }

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_api_url(), "http://api.openweathermap.org/data/2.5");
        assert_eq!(default_timeout_ms(), 5_000);
        assert_eq!(default_display_timezone(), "Europe/Moscow");
        assert_eq!(default_port(), 8083);
    }

    #[test]
    fn load_requires_api_key() {
        let err = envy::from_iter::<_, Config>(std::iter::empty::<(String, String)>());
        assert!(err.is_err(), "missing OPENWEATHER_API_KEY must fail");
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let config = envy::from_iter::<_, Config>(vec![(
            "OPENWEATHER_API_KEY".to_string(),
            "abc".to_string(),
        )])
        .expect("key alone should be enough");

        assert_eq!(config.openweather_api_key, "abc");
        assert_eq!(config.port, 8083);
        assert_eq!(config.display_timezone, "Europe/Moscow");
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        let config = Config {
            openweather_api_key: String::new(),
            ..test_config()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn validate_rejects_unknown_timezone() {
        let config = Config {
            display_timezone: "Mars/Olympus_Mons".to_string(),
            ..test_config()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn display_tz_parses_default() {
        let tz = test_config().display_tz().expect("Europe/Moscow is valid");
        assert_eq!(tz, chrono_tz::Europe::Moscow);
    }
}
