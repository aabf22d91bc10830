use thiserror::Error;

pub const CITY_REQUIRED: &str = "City is a required parameter.";
pub const RETRIEVE_FAILED: &str = "Failed to retrieve data.";
pub const DATA_NOT_FOUND: &str = "Weather data not found.";

/// The one recognized failure kind of a temperature lookup.
///
/// Anything a provider does not recognize (DNS errors, refused connections,
/// undecodable bodies) travels as a plain `anyhow::Error` instead, so callers
/// tell the two apart with `downcast_ref::<WeatherServiceError>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct WeatherServiceError {
    message: String,
}

impl WeatherServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn city_required() -> Self {
        Self::new(CITY_REQUIRED)
    }

    pub fn retrieve_failed() -> Self {
        Self::new(RETRIEVE_FAILED)
    }

    pub fn data_not_found() -> Self {
        Self::new(DATA_NOT_FOUND)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
