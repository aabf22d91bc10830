//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The temperature provider abstraction and its OpenWeather implementation
//! - The [`WeatherApp`] façade callers go through
//! - Configuration & credentials handling
//! - The single recognized failure kind, [`WeatherServiceError`]
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use app::WeatherApp;
pub use config::{Config, DEFAULT_CITY, ProviderConfig};
pub use error::WeatherServiceError;
pub use model::TemperatureReading;
pub use provider::{ProviderId, TemperatureProvider, openweather::OpenWeatherProvider};
