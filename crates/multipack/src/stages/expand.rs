use arcstr::ArcStr;
use futures::{StreamExt, stream};
use multipack_common::{
  ChunkIdx, Compilation, CompiledAsset, NormalizedMultiOutputOptions, VariantRecord,
};
use multipack_fs::FileSystem;
use tracing::debug;

use crate::{
  errors,
  resolve::ResourceResolver,
  stages::ScannedChunk,
  transform::transform,
  utils::filename::{file_stem, render_variant_filename},
};

/// In-flight (file, value) pairs per chunk.
const EXPANSION_CONCURRENCY: usize = 8;

#[derive(Debug, Default)]
pub struct ExpandOutput {
  pub records: Vec<VariantRecord>,
  /// Chunks that produced at least one variant, in chunk order.
  pub variant_chunks: Vec<ChunkIdx>,
}

/// Transforms the (file × value) cross product of every scanned chunk.
///
/// Pairs fan out concurrently with unordered completion, but all per-chunk
/// work is joined before the chunk settles, and records are re-sorted into
/// file order × configured value order so the output is deterministic. A
/// failed pair is reported on the compilation and does not roll back pairs
/// that already completed.
pub async fn expand_chunks<F: FileSystem>(
  compilation: &mut Compilation,
  scanned: &[ScannedChunk],
  options: &NormalizedMultiOutputOptions,
  resolver: &ResourceResolver<F>,
) -> ExpandOutput {
  let hash_token: Option<ArcStr> =
    if options.filename.contains("[contenthash]") { compilation.hash.clone() } else { None };

  let mut output = ExpandOutput::default();

  for scanned_chunk in scanned {
    let chunk_name = compilation.chunks[scanned_chunk.chunk_idx].name.clone();

    // Owned cross product, so the fan-out below borrows nothing from the
    // chunk and the enclosing future stays boxable.
    let mut pairs: Vec<(usize, usize, ArcStr, ArcStr)> = Vec::new();
    for (file_order, file) in scanned_chunk.files.iter().enumerate() {
      for (value_order, value) in options.values.iter().enumerate() {
        pairs.push((file_order, value_order, file.clone(), value.clone()));
      }
    }

    let mut results = stream::iter(pairs.into_iter().map(
      |(file_order, value_order, file, value)| {
        // Snapshot the asset here; transforms never alias the store.
        let asset = compilation.assets.get(&file);
        async move {
          let result = match asset {
            Some(asset) => transform(asset.text(), &value, resolver).await,
            None => Err(errors::missing_compiled_asset(&file, &value)),
          };
          (file_order, value_order, result)
        }
      },
    ))
    .buffer_unordered(EXPANSION_CONCURRENCY)
    .collect::<Vec<_>>()
    .await;

    results.sort_unstable_by_key(|(file_order, value_order, _)| (*file_order, *value_order));

    let mut chunk_has_variant = false;
    for (file_order, value_order, result) in results {
      let file = &scanned_chunk.files[file_order];
      let value = &options.values[value_order];
      match result {
        Ok(content) => {
          let name = chunk_name.as_deref().unwrap_or_else(|| file_stem(file));
          let variant_filename: ArcStr =
            render_variant_filename(&options.filename, name, value, hash_token.as_deref()).into();
          if options.debug {
            debug!("add asset {variant_filename}");
          }
          compilation.assets.set(variant_filename.clone(), CompiledAsset::new(content));
          output.records.push(VariantRecord {
            value: value.clone(),
            filename: variant_filename,
            chunk_idx: scanned_chunk.chunk_idx,
            chunk_name: chunk_name.clone(),
            hash_token: hash_token.clone(),
          });
          chunk_has_variant = true;
        }
        Err(error) => compilation.push_error(error),
      }
    }

    if chunk_has_variant {
      output.variant_chunks.push(scanned_chunk.chunk_idx);
    }
  }

  output
}
