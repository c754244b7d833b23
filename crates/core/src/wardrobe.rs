//! Garment repository trait — where a user's wardrobe lives.
//!
//! The stylist never writes garments during a recommendation; it reads a
//! snapshot through `list_by_owner` / `list_by_owner_and_category`. The
//! mutating methods exist for the CLI and for seeding test fixtures.

use crate::error::WardrobeError;
use crate::garment::{Category, Garment};
use async_trait::async_trait;

/// The core GarmentRepository trait.
///
/// Implementations: in-memory (for testing), JSON-lines file.
/// Listing preserves insertion order; the resolver relies on it to pick
/// the "first row" of a tier.
#[async_trait]
pub trait GarmentRepository: Send + Sync {
    /// The backend name (e.g., "memory", "file").
    fn name(&self) -> &str;

    /// All garments owned by `owner_id`.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Garment>, WardrobeError>;

    /// Garments owned by `owner_id` in one category.
    async fn list_by_owner_and_category(
        &self,
        owner_id: &str,
        category: Category,
    ) -> Result<Vec<Garment>, WardrobeError> {
        let mut garments = self.list_by_owner(owner_id).await?;
        garments.retain(|g| g.category == category);
        Ok(garments)
    }

    /// Store a garment, returning its id.
    async fn add(&self, garment: Garment) -> Result<String, WardrobeError>;

    /// Remove a garment by id. Returns whether anything was removed.
    async fn remove(&self, owner_id: &str, id: &str) -> Result<bool, WardrobeError>;

    /// Number of garments owned by `owner_id`.
    async fn count(&self, owner_id: &str) -> Result<usize, WardrobeError> {
        Ok(self.list_by_owner(owner_id).await?.len())
    }
}
