use arcstr::ArcStr;
use multipack_common::{
  ChunkIdx, Compilation, CompiledAsset, NormalizedMultiOutputOptions, VariantRecord, marker,
};
use multipack_utils::{indexmap::FxIndexMap, xxhash::xxhash_hex};
use tracing::trace;

/// The hash token in a variant's filename was computed from the
/// pre-substitution content and is wrong once resources differ per value.
/// Recompute it against the final text and rename the asset, re-fetching by
/// key rather than trusting any reference taken in an earlier phase.
///
/// Idempotent: a second run over unchanged content finds the token already
/// correct and renames nothing.
pub fn reconcile_filenames(
  compilation: &mut Compilation,
  records: &mut [VariantRecord],
  variant_chunks: &[ChunkIdx],
  options: &NormalizedMultiOutputOptions,
) {
  let chunk_map = serialize_chunk_map(variant_chunks);

  for record in &mut *records {
    let Some(asset) = compilation.assets.get(&record.filename) else {
      continue;
    };
    let text = asset.text().replace(marker::CHUNK_MAP_MARKER, &chunk_map);

    let Some(hash_token) = record.hash_token.clone() else {
      compilation.assets.set(record.filename.clone(), CompiledAsset::new(text));
      continue;
    };

    let recomputed = xxhash_hex(text.as_bytes());
    let truncated = &recomputed[..hash_token.len().min(recomputed.len())];
    if truncated == hash_token.as_str() {
      compilation.assets.set(record.filename.clone(), CompiledAsset::new(text));
      continue;
    }

    let renamed: ArcStr = record.filename.replace(hash_token.as_str(), truncated).into();
    if options.ultra_debug {
      trace!("update hash in filename for {} -> {renamed}", record.filename);
    }
    compilation.assets.set(renamed.clone(), CompiledAsset::new(text));
    compilation.assets.delete(&record.filename);
    record.rename(renamed, ArcStr::from(truncated));
  }
}

fn serialize_chunk_map(variant_chunks: &[ChunkIdx]) -> String {
  let map: FxIndexMap<String, bool> =
    variant_chunks.iter().map(|chunk_idx| (chunk_idx.index().to_string(), true)).collect();
  serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string())
}
