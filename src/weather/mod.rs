//! Weather client for the OpenWeather current-weather API.

pub mod client;
pub mod types;

pub use client::WeatherClient;
pub use types::WeatherReading;
