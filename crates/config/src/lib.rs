//! Configuration loading, validation, and management for Outfitter.
//!
//! Loads configuration from `~/.outfitter/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use outfitter_core::OccasionProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.outfitter/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Wardrobe owner used by the CLI
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Location passed to the weather source
    #[serde(default = "default_location")]
    pub location: String,

    /// Request admission control
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Weather source configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Recommendation tuning
    #[serde(default)]
    pub stylist: StylistConfig,

    /// Wardrobe storage
    #[serde(default)]
    pub wardrobe: WardrobeConfig,

    /// Extra or overriding occasion profiles, merged over the built-in table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occasions: Vec<OccasionProfile>,
}

fn default_owner() -> String {
    "local".into()
}
fn default_location() -> String {
    "New York,US".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

fn default_max_requests() -> usize {
    1000
}
fn default_window_secs() -> u64 {
    3600
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// "fixed" or "mock"
    #[serde(default = "default_weather_source")]
    pub source: String,

    /// Reading reported by the fixed source
    #[serde(default = "default_fixed_temperature")]
    pub fixed_temperature_f: f64,

    #[serde(default = "default_fixed_description")]
    pub fixed_description: String,

    /// Used by the outfit composer when the weather lookup fails
    #[serde(default = "default_fallback_temperature")]
    pub fallback_temperature_f: f64,

    #[serde(default = "default_fallback_description")]
    pub fallback_description: String,
}

fn default_weather_source() -> String {
    "fixed".into()
}
fn default_fixed_temperature() -> f64 {
    72.0
}
fn default_fixed_description() -> String {
    "partly cloudy".into()
}
fn default_fallback_temperature() -> f64 {
    70.0
}
fn default_fallback_description() -> String {
    "moderate".into()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            source: default_weather_source(),
            fixed_temperature_f: default_fixed_temperature(),
            fixed_description: default_fixed_description(),
            fallback_temperature_f: default_fallback_temperature(),
            fallback_description: default_fallback_description(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylistConfig {
    /// Optional categories stop being added once a suggestion holds this many items
    #[serde(default = "default_max_items")]
    pub max_items_per_suggestion: usize,
}

fn default_max_items() -> usize {
    4
}

impl Default for StylistConfig {
    fn default() -> Self {
        Self {
            max_items_per_suggestion: default_max_items(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeConfig {
    /// "file" or "memory"
    #[serde(default = "default_wardrobe_backend")]
    pub backend: String,

    /// JSON-lines file for the file backend (defaults to `~/.outfitter/wardrobe.jsonl`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_wardrobe_backend() -> String {
    "file".into()
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            backend: default_wardrobe_backend(),
            path: None,
        }
    }
}

impl WardrobeConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| AppConfig::config_dir().join("wardrobe.jsonl"))
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.outfitter/config.toml).
    ///
    /// Environment overrides:
    /// - `OUTFITTER_OWNER`
    /// - `OUTFITTER_LOCATION`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(owner) = std::env::var("OUTFITTER_OWNER") {
            config.owner = owner;
        }

        if let Ok(location) = std::env::var("OUTFITTER_LOCATION") {
            config.location = location;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".outfitter")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.rate_limit.max_requests == 0 {
            return Err(ConfigError::ValidationError(
                "rate_limit.max_requests must be > 0".into(),
            ));
        }

        if self.rate_limit.window_secs == 0 {
            return Err(ConfigError::ValidationError(
                "rate_limit.window_secs must be > 0".into(),
            ));
        }

        if self.stylist.max_items_per_suggestion == 0 {
            return Err(ConfigError::ValidationError(
                "stylist.max_items_per_suggestion must be >= 1".into(),
            ));
        }

        for (key, value) in [
            ("weather.fixed_temperature_f", self.weather.fixed_temperature_f),
            ("weather.fallback_temperature_f", self.weather.fallback_temperature_f),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must be a finite number, got {value}"
                )));
            }
        }

        if !matches!(self.weather.source.as_str(), "fixed" | "mock") {
            return Err(ConfigError::ValidationError(format!(
                "weather.source must be \"fixed\" or \"mock\", got \"{}\"",
                self.weather.source
            )));
        }

        if !matches!(self.wardrobe.backend.as_str(), "file" | "memory") {
            return Err(ConfigError::ValidationError(format!(
                "wardrobe.backend must be \"file\" or \"memory\", got \"{}\"",
                self.wardrobe.backend
            )));
        }

        if let Some(profile) = self.occasions.iter().find(|o| o.required_categories.is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "occasion '{}' needs at least one required category",
                profile.id
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            location: default_location(),
            rate_limit: RateLimitConfig::default(),
            weather: WeatherConfig::default(),
            stylist: StylistConfig::default(),
            wardrobe: WardrobeConfig::default(),
            occasions: vec![],
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for outfitter_core::Error {
    fn from(err: ConfigError) -> Self {
        outfitter_core::Error::Config {
            message: err.to_string(),
        }
    }
}
