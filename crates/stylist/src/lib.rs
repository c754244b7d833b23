//! # Outfitter Stylist
//!
//! The recommendation engine: resolving free-text garment references,
//! scoring garments against occasion profiles, composing weather-aware daily
//! outfits, and generating style tips.
//!
//! Everything except [`service`] is pure and synchronous. The service wires
//! those functions to a [`GarmentRepository`](outfitter_core::GarmentRepository),
//! a [`WeatherSource`](outfitter_core::WeatherSource), and a rate limiter.

pub mod composer;
pub mod occasions;
pub mod picker;
pub mod resolver;
pub mod scoring;
pub mod service;
pub mod suggestions;
pub mod tips;

pub use composer::{OutfitSelection, SlotFill, WeatherBand, compose_daily_outfit};
pub use occasions::OccasionTable;
pub use picker::{Picker, RandomPicker, ScriptedPicker};
pub use resolver::resolve;
pub use scoring::{ScoredCandidate, ScoringCriteria, select_best};
pub use service::Stylist;
pub use suggestions::{Suggestion, SuggestionSet, build_suggestions};
pub use tips::generate_tips;
