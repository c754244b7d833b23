//! In-memory backend — useful for testing and ephemeral sessions.

use async_trait::async_trait;
use outfitter_core::{Garment, GarmentRepository, WardrobeError};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// An in-memory wardrobe that stores garments in a Vec, in insertion order.
pub struct InMemoryWardrobe {
    garments: Arc<RwLock<Vec<Garment>>>,
}

impl InMemoryWardrobe {
    pub fn new() -> Self {
        Self {
            garments: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Seed the wardrobe with existing garments (ids are kept as given).
    pub fn with_garments(garments: Vec<Garment>) -> Self {
        Self {
            garments: Arc::new(RwLock::new(garments)),
        }
    }
}

impl Default for InMemoryWardrobe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GarmentRepository for InMemoryWardrobe {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Garment>, WardrobeError> {
        let garments = self.garments.read().await;
        Ok(garments
            .iter()
            .filter(|g| g.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn add(&self, mut garment: Garment) -> Result<String, WardrobeError> {
        if garment.id.is_empty() {
            garment.id = Uuid::new_v4().to_string();
        }
        let id = garment.id.clone();
        self.garments.write().await.push(garment);
        Ok(id)
    }

    async fn remove(&self, owner_id: &str, id: &str) -> Result<bool, WardrobeError> {
        let mut garments = self.garments.write().await;
        let len_before = garments.len();
        garments.retain(|g| !(g.owner_id == owner_id && g.id == id));
        Ok(garments.len() < len_before)
    }
}
