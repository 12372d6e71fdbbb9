use arcstr::ArcStr;

use crate::ChunkIdx;

/// One successfully expanded (file, value) pair. Created during expansion,
/// consumed by reconciliation and manifest emission; only renaming may touch
/// it afterwards.
#[derive(Debug, Clone)]
pub struct VariantRecord {
  pub value: ArcStr,
  pub filename: ArcStr,
  pub chunk_idx: ChunkIdx,
  pub chunk_name: Option<ArcStr>,
  /// The content-hash token embedded in `filename`, when the variant filename
  /// template carries one.
  pub hash_token: Option<ArcStr>,
}

impl VariantRecord {
  pub fn rename(&mut self, filename: ArcStr, hash_token: ArcStr) {
    self.filename = filename;
    self.hash_token = Some(hash_token);
  }
}
