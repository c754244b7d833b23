//! Fixed weather — the same reading for every location.

use async_trait::async_trait;
use outfitter_core::{WeatherError, WeatherReport, WeatherSource};

pub struct FixedWeather {
    report: WeatherReport,
}

impl FixedWeather {
    pub fn new(temperature_f: f64, description: impl Into<String>) -> Self {
        Self {
            report: WeatherReport::new(temperature_f, description),
        }
    }
}

impl Default for FixedWeather {
    /// 72°F and partly cloudy.
    fn default() -> Self {
        Self::new(72.0, "partly cloudy")
    }
}

#[async_trait]
impl WeatherSource for FixedWeather {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn current(&self, _location: &str) -> Result<WeatherReport, WeatherError> {
        Ok(self.report.clone())
    }
}
