//! Unified error types for the weather dashboard.

use thiserror::Error;

/// Unified error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Service startup/teardown error.
    #[error("lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// Upstream weather API error.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors. Fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The upstream API credential is absent or empty.
    #[error("OPENWEATHER_API_KEY environment variable is not set")]
    MissingCredential,

    /// The display timezone is not a known IANA identifier.
    #[error("unknown display timezone: {0}")]
    InvalidTimezone(String),

    /// Environment deserialization failed.
    #[error("environment error: {0}")]
    Env(#[from] envy::Error),
}

/// Errors from the upstream weather API. Recovered per city, never fatal
/// to a page render.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure or timeout talking to the weather API.
    #[error("request to weather API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx status from the weather API.
    #[error("weather API returned HTTP {status} for city {city}")]
    Status {
        /// City identifier the request was for.
        city: String,
        /// Upstream status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("malformed weather payload for city {city}: {reason}")]
    Malformed {
        /// City identifier the request was for.
        city: String,
        /// Deserialization failure detail.
        reason: String,
    },

    /// The response parsed but a required field was absent.
    #[error("weather payload for city {city} is missing {field}")]
    MissingField {
        /// City identifier the request was for.
        city: String,
        /// Dotted path of the absent field.
        field: &'static str,
    },
}

/// Service initialization and shutdown errors.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// The HTTP client for the weather service could not be built.
    #[error("failed to construct weather client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// `start()` was called on a manager that has already stopped.
    #[error("service manager has already stopped; restart the process")]
    AlreadyStopped,
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
