//! # Outfitter Core
//!
//! Domain types, traits, and error definitions for the Outfitter wardrobe
//! stylist. This crate has **no framework dependencies**; it defines the
//! domain model that every other crate builds on.
//!
//! ## Design Philosophy
//!
//! Every external collaborator is a trait here: the garment repository and
//! the weather source. Implementations live in their own crates, which keeps
//! the stylist logic testable against in-memory stubs.

pub mod error;
pub mod garment;
pub mod occasion;
pub mod style;
pub mod wardrobe;
pub mod weather;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result, WardrobeError, WeatherError};
pub use garment::{Category, Garment, GarmentDetail};
pub use occasion::OccasionProfile;
pub use style::Style;
pub use wardrobe::GarmentRepository;
pub use weather::{WeatherReport, WeatherSource};
