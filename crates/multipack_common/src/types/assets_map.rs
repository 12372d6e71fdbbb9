use multipack_utils::indexmap::FxIndexMap;
use serde::Serialize;

pub type AssetKindMap = FxIndexMap<String, String>;

/// value → chunk name → asset-kind extension → public file path.
///
/// Insertion merges into existing subtrees, so sibling kinds discovered after
/// emit never clobber the script entry.
#[derive(Debug, Default, Serialize)]
pub struct AssetsMap(pub FxIndexMap<String, FxIndexMap<String, AssetKindMap>>);

impl AssetsMap {
  pub fn insert(&mut self, value: &str, chunk_name: &str, kind: &str, file_path: String) {
    self
      .0
      .entry(value.to_string())
      .or_default()
      .entry(chunk_name.to_string())
      .or_default()
      .insert(kind.to_string(), file_path);
  }

  pub fn value(&self, value: &str) -> Option<&FxIndexMap<String, AssetKindMap>> {
    self.0.get(value)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}
