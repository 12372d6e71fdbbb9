use arcstr::ArcStr;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::CompiledAsset;

/// The host's asset collection, treated as a synchronized key-value store.
///
/// `get` hands out owned snapshots rather than references, so phase code can
/// never observe a stale entry across host-driven mutation phases. Re-fetch by
/// key instead of caching.
#[derive(Debug, Default)]
pub struct AssetStore {
  assets: DashMap<ArcStr, CompiledAsset, FxBuildHasher>,
}

impl AssetStore {
  pub fn get(&self, key: &str) -> Option<CompiledAsset> {
    self.assets.get(key).map(|entry| entry.value().clone())
  }

  pub fn set(&self, key: ArcStr, asset: CompiledAsset) {
    self.assets.insert(key, asset);
  }

  pub fn delete(&self, key: &str) -> Option<CompiledAsset> {
    self.assets.remove(key).map(|(_, asset)| asset)
  }

  pub fn keys(&self) -> Vec<ArcStr> {
    self.assets.iter().map(|entry| entry.key().clone()).collect()
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.assets.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }
}
