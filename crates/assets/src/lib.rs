//! Asset handle store for theme resources.
//!
//! Assets are identified by a content hash of their kind and locator. The
//! renderer consumes assets by handle, never by raw file paths. Locators are
//! opaque: nothing here touches the filesystem except [`AssetStore::save`]
//! and [`AssetStore::load`].
//!
//! Handles are reference counted so two owners acquiring the same locator
//! share one entry, and the entry disappears when the last owner releases it.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Content-addressed asset ID computed from kind and locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(pub u64);

/// What an asset is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetKind {
    /// Directory of chess piece models.
    PieceSet,
    BoardTexture,
    /// HDR environment map used for lighting.
    EnvironmentMap,
    /// Skeletal or keyframe animation clips for the piece set.
    Animation,
}

impl AssetKind {
    fn tag(self) -> u8 {
        match self {
            Self::PieceSet => 0,
            Self::BoardTexture => 1,
            Self::EnvironmentMap => 2,
            Self::Animation => 3,
        }
    }
}

/// An entry in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub kind: AssetKind,
    pub locator: String,
    /// Number of outstanding acquisitions.
    pub refs: u32,
}

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset not found: {0:?}")]
    NotFound(AssetId),
    #[error("empty locator for {0:?}")]
    EmptyLocator(AssetKind),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reference-counted, content-addressed asset store.
///
/// Can be persisted to disk as JSON for inspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetStore {
    assets: BTreeMap<AssetId, AssetEntry>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a handle for `locator`, registering it on first use.
    pub fn acquire(&mut self, kind: AssetKind, locator: &str) -> Result<AssetId, AssetError> {
        if locator.trim().is_empty() {
            return Err(AssetError::EmptyLocator(kind));
        }
        let id = content_hash(kind, locator);
        let entry = self.assets.entry(id).or_insert_with(|| AssetEntry {
            kind,
            locator: locator.to_string(),
            refs: 0,
        });
        entry.refs += 1;
        tracing::debug!(?id, ?kind, locator, refs = entry.refs, "asset acquired");
        Ok(id)
    }

    /// Drop one reference to `id`. Returns true if the entry was evicted.
    pub fn release(&mut self, id: AssetId) -> Result<bool, AssetError> {
        let entry = self.assets.get_mut(&id).ok_or(AssetError::NotFound(id))?;
        entry.refs = entry.refs.saturating_sub(1);
        if entry.refs > 0 {
            return Ok(false);
        }
        if let Some(evicted) = self.assets.remove(&id) {
            tracing::debug!(?id, locator = %evicted.locator, "asset evicted");
        }
        Ok(true)
    }

    /// Get an asset by ID.
    pub fn get(&self, id: AssetId) -> Option<&AssetEntry> {
        self.assets.get(&id)
    }

    /// Find the handle for a locator without acquiring it.
    pub fn lookup(&self, kind: AssetKind, locator: &str) -> Option<AssetId> {
        let id = content_hash(kind, locator);
        self.assets.contains_key(&id).then_some(id)
    }

    /// Number of resident assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate resident assets in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &AssetEntry)> {
        self.assets.iter()
    }

    /// Save the store to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a store from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let file = std::fs::File::open(path)?;
        let store: Self = serde_json::from_reader(file)?;
        Ok(store)
    }
}

fn content_hash(kind: AssetKind, locator: &str) -> AssetId {
    let mut hasher = Sha256::new();
    hasher.update([kind.tag()]);
    hasher.update(locator.as_bytes());
    let result = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&result[..8]);
    AssetId(u64::from_le_bytes(bytes))
}

pub fn crate_info() -> &'static str {
    "gambit-assets v0.1.0"
}
