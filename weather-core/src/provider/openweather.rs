use anyhow::{Context, Result};
use reqwest::{StatusCode, blocking::Client};
use serde_json::Value;

use crate::error::WeatherServiceError;

use super::TemperatureProvider;

pub const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, base_url: CURRENT_WEATHER_URL.to_string(), http: Client::new() }
    }

    /// Point the provider at another endpoint speaking the same API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn fetch_current(&self, city: &str) -> Result<i64> {
        if city.is_empty() {
            return Err(WeatherServiceError::city_required().into());
        }

        tracing::debug!(city, url = %self.base_url, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        if status != StatusCode::OK {
            tracing::debug!(city, %status, "OpenWeather returned non-success status");
            return Err(WeatherServiceError::retrieve_failed().into());
        }

        let body: Value = res.json().context("Failed to parse OpenWeather current JSON")?;

        let temp = current_temp(&body).ok_or_else(WeatherServiceError::data_not_found)?;
        tracing::debug!(city, temp, "OpenWeather current temperature");

        Ok(round_celsius(temp))
    }
}

impl TemperatureProvider for OpenWeatherProvider {
    fn get_temperature(&self, city: &str) -> Result<i64> {
        // Categorized failures are re-raised as a fresh value with the same message.
        self.fetch_current(city).map_err(|err| match err.downcast::<WeatherServiceError>() {
            Ok(failure) => WeatherServiceError::new(failure.message()).into(),
            Err(other) => other,
        })
    }
}

fn current_temp(body: &Value) -> Option<f64> {
    body.get("main")?.get("temp")?.as_f64()
}

/// Nearest whole degree, ties to even.
pub fn round_celsius(temp: f64) -> i64 {
    temp.round_ties_even() as i64
}
