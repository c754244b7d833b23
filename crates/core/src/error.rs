//! Error types for the Outfitter domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Outfitter operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Wardrobe errors ---
    #[error("Wardrobe error: {0}")]
    Wardrobe(#[from] WardrobeError),

    // --- Weather errors ---
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    // --- Admission control ---
    #[error("Rate limit exceeded for client {client}")]
    RateLimited { client: String },

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum WardrobeError {
    /// Every resolver tier came back empty.
    #[error("Clothing item '{query}' not found in wardrobe ({} items available)", available.len())]
    NotFound {
        query: String,
        /// `"name: description"` for each garment the owner has.
        available: Vec<String>,
    },

    #[error("No wardrobe items found for {0}")]
    EmptyInventory(String),

    #[error("Unknown occasion: {0}")]
    UnknownOccasion(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, Error)]
pub enum WeatherError {
    #[error("Weather service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),
}
