//! Weather source implementations for Outfitter.
//!
//! Live weather APIs sit outside this workspace. Two sources ship here:
//! - [`FixedWeather`]: always reports the configured reading
//! - [`MockWeather`]: deterministic per-location readings for demos and tests

pub mod fixed;
pub mod mock;

use std::sync::Arc;

use outfitter_config::WeatherConfig;
use outfitter_core::WeatherSource;

pub use fixed::FixedWeather;
pub use mock::MockWeather;

/// Build the weather source named by the configuration.
pub fn from_config(config: &WeatherConfig) -> Arc<dyn WeatherSource> {
    match config.source.as_str() {
        "mock" => Arc::new(MockWeather),
        _ => Arc::new(FixedWeather::new(
            config.fixed_temperature_f,
            config.fixed_description.clone(),
        )),
    }
}
