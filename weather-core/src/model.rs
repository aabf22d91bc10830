use std::fmt;

/// Rounded current temperature for one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureReading {
    pub city: String,
    pub celsius: i64,
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current temperature in {}: {}°C", self.city, self.celsius)
    }
}
