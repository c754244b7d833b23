//! Garment repository implementations for Outfitter.

pub mod file_backend;
pub mod in_memory;

pub use file_backend::FileWardrobe;
pub use in_memory::InMemoryWardrobe;
