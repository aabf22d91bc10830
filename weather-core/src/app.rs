use anyhow::Result;

use crate::{model::TemperatureReading, provider::TemperatureProvider};

/// Keeps callers away from the concrete provider choice.
#[derive(Debug)]
pub struct WeatherApp {
    provider: Box<dyn TemperatureProvider>,
}

impl WeatherApp {
    pub fn new(provider: Box<dyn TemperatureProvider>) -> Self {
        Self { provider }
    }

    /// Delegates to the provider; results and failures pass through untouched.
    pub fn get_temperature(&self, city: &str) -> Result<i64> {
        self.provider.get_temperature(city)
    }

    pub fn reading(&self, city: &str) -> Result<TemperatureReading> {
        let celsius = self.get_temperature(city)?;
        Ok(TemperatureReading { city: city.to_owned(), celsius })
    }
}
