//! File-based wardrobe — persistent JSON-lines storage.
//!
//! Each line is a JSON-encoded `Garment`.
//!
//! Storage location: `~/.outfitter/wardrobe.jsonl` (configurable).

use async_trait::async_trait;
use outfitter_core::{Garment, GarmentRepository, WardrobeError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

/// A file-backed wardrobe using JSONL (one JSON object per line).
///
/// Garments are loaded into memory on creation and the whole file is
/// rewritten on every mutation (add, remove). A failed write leaves the
/// in-memory list as it was. Reads never touch the disk.
pub struct FileWardrobe {
    path: PathBuf,
    garments: Arc<RwLock<Vec<Garment>>>,
}

impl FileWardrobe {
    /// Open the wardrobe at `path`.
    ///
    /// A missing file starts empty; it is created on first write.
    pub fn new(path: PathBuf) -> Self {
        let garments = Self::load_from_disk(&path);
        debug!(path = %path.display(), count = garments.len(), "File wardrobe loaded");
        Self {
            path,
            garments: Arc::new(RwLock::new(garments)),
        }
    }

    fn load_from_disk(path: &Path) -> Vec<Garment> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str::<Garment>(line) {
                Ok(garment) => Some(garment),
                Err(e) => {
                    warn!(error = %e, "Skipping corrupted wardrobe entry");
                    None
                }
            })
            .collect()
    }

    /// Write `garments` as the whole file contents.
    ///
    /// Callers hold the write lock, so the in-memory list only changes once
    /// this succeeds.
    async fn persist(&self, garments: &[Garment]) -> Result<(), WardrobeError> {
        let body = encode(garments)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                WardrobeError::Storage(format!("cannot create {}: {e}", dir.display()))
            })?;
        }
        tokio::fs::write(&self.path, body).await.map_err(|e| {
            WardrobeError::Storage(format!("cannot write {}: {e}", self.path.display()))
        })
    }
}

/// One JSON object per line, newline-terminated.
fn encode(garments: &[Garment]) -> Result<String, WardrobeError> {
    garments.iter().try_fold(String::new(), |mut out, garment| {
        let line = serde_json::to_string(garment)
            .map_err(|e| WardrobeError::Storage(format!("cannot encode '{}': {e}", garment.id)))?;
        out.push_str(&line);
        out.push('\n');
        Ok(out)
    })
}

#[async_trait]
impl GarmentRepository for FileWardrobe {
    fn name(&self) -> &str {
        "file"
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

        let mut garments = self.garments.write().await;
        garments.push(garment);
        if let Err(e) = self.persist(&garments).await {
            garments.pop();
            warn!(id = %id, error = %e, "Garment not added, wardrobe file unchanged");
            return Err(e);
        }
        Ok(id)
    }

    async fn remove(&self, owner_id: &str, id: &str) -> Result<bool, WardrobeError> {
        let mut garments = self.garments.write().await;
        let kept: Vec<Garment> = garments
            .iter()
            .filter(|g| !(g.owner_id == owner_id && g.id == id))
            .cloned()
            .collect();
        if kept.len() == garments.len() {
            return Ok(false);
        }

        self.persist(&kept).await?;
        *garments = kept;
        Ok(true)
    }
}
