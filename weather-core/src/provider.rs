use crate::{Config, provider::openweather::OpenWeatherProvider};
use std::fmt::Debug;

pub mod openweather;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweather",
        }
    }

    /// Environment variable that overrides the configured API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "OPENWEATHER_API_KEY",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can report the current temperature of a city.
///
/// Returns whole degrees Celsius. Recognized failures are
/// [`WeatherServiceError`](crate::WeatherServiceError) values inside the
/// `anyhow::Error`; the trait itself puts no constraint on `city`.
pub trait TemperatureProvider: Send + Sync + Debug {
    fn get_temperature(&self, city: &str) -> anyhow::Result<i64>;
}

/// Construct a provider for `id`, preferring an explicit key over env and config.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
    explicit_key: Option<&str>,
) -> anyhow::Result<Box<dyn TemperatureProvider>> {
    provider_from_config_with(id, config, explicit_key, |name| std::env::var(name).ok())
}

/// Like [`provider_from_config`], with the environment lookup supplied by the caller.
pub fn provider_from_config_with(
    id: ProviderId,
    config: &Config,
    explicit_key: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Box<dyn TemperatureProvider>> {
    let api_key = explicit_key
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
        .or_else(|| config.resolve_api_key_with(id, env))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No API key configured for provider '{id}'.\n\
                 Hint: set {} or run `weather configure` and enter your API key.",
                id.api_key_env()
            )
        })?;

    let boxed: Box<dyn TemperatureProvider> = match id {
        ProviderId::OpenWeather => Box::new(OpenWeatherProvider::new(api_key)),
    };

    Ok(boxed)
}
