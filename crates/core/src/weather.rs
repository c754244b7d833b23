//! Weather facts consumed by the outfit composer.

use crate::error::WeatherError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Current conditions, always in Fahrenheit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_f: f64,
    pub description: String,
}

impl WeatherReport {
    pub fn new(temperature_f: f64, description: impl Into<String>) -> Self {
        Self {
            temperature_f,
            description: description.into(),
        }
    }

    /// `"45°F, light rain"`
    pub fn context(&self) -> String {
        format!("{}°F, {}", self.temperature_f, self.description)
    }
}

/// A source of current weather for a location.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    fn name(&self) -> &str;

    async fn current(&self, location: &str) -> Result<WeatherReport, WeatherError>;
}
