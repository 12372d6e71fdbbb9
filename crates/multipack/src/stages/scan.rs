use std::path::Path;

use arcstr::ArcStr;
use multipack_common::{ChunkIdx, Compilation, marker};
use tracing::trace;

/// Files eligible for expansion, grouped by owning chunk in chunk order.
#[derive(Debug)]
pub struct ScannedChunk {
  pub chunk_idx: ChunkIdx,
  pub files: Vec<ArcStr>,
}

/// Enumerates every transformable script the host produced and keeps those
/// carrying at least one marker.
pub fn scan_chunks(compilation: &Compilation, ultra_debug: bool) -> Vec<ScannedChunk> {
  compilation
    .chunks
    .iter_enumerated()
    .filter_map(|(chunk_idx, chunk)| {
      let files: Vec<ArcStr> = chunk
        .files
        .iter()
        .filter(|file| {
          if Path::new(file.as_str()).extension().is_none_or(|extension| extension != "js") {
            return false;
          }
          let Some(asset) = compilation.assets.get(file) else {
            return false;
          };
          if !marker::contains_marker(asset.text()) {
            if ultra_debug {
              trace!("ignoring asset {file}, no replacement to process");
            }
            return false;
          }
          true
        })
        .cloned()
        .collect();
      (!files.is_empty()).then_some(ScannedChunk { chunk_idx, files })
    })
    .collect()
}
