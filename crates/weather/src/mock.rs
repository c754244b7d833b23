//! Mock weather — deterministic readings derived from the location name.
//!
//! Lets the daily outfit flow run end-to-end without network access while
//! still giving different cities different temperature bands.

use async_trait::async_trait;
use outfitter_core::{WeatherError, WeatherReport, WeatherSource};
use tracing::debug;

const CONDITIONS: [&str; 8] = [
    "clear sky",
    "partly cloudy",
    "overcast",
    "light rain",
    "heavy rain",
    "thunderstorm",
    "snow",
    "fog",
];

pub struct MockWeather;

#[async_trait]
impl WeatherSource for MockWeather {
    fn name(&self) -> &str {
        "mock"
    }

    async fn current(&self, location: &str) -> Result<WeatherReport, WeatherError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(WeatherError::InvalidLocation("location is empty".into()));
        }

        let report = generate_mock_weather(location);
        debug!(location, temperature_f = report.temperature_f, "Mock weather generated");
        Ok(report)
    }
}

/// Simple string hash, so the same location always maps to the same reading.
fn location_hash(location: &str) -> u32 {
    location
        .to_lowercase()
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32))
}

fn generate_mock_weather(location: &str) -> WeatherReport {
    let hash = location_hash(location);

    // -5 to 34°C, reported in Fahrenheit to one decimal.
    let base_temp_c = ((hash % 40) as f64) - 5.0;
    let temperature_f = ((base_temp_c * 9.0 / 5.0 + 32.0) * 10.0).round() / 10.0;

    let mut description = CONDITIONS[(hash as usize / 7) % CONDITIONS.len()].to_string();
    if temperature_f < 40.0 {
        description = format!("cold, {description}");
    } else if temperature_f >= 85.0 {
        description = format!("hot, {description}");
    }

    WeatherReport::new(temperature_f, description)
}
