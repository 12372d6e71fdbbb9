mod asset_store;
mod chunk;
pub mod marker;
mod options;
mod types;

pub use crate::{
  asset_store::AssetStore,
  chunk::{Chunk, ChunkTable},
  options::{
    AssetsManifestOptions, MultiOutputOptions,
    normalized_multi_output_options::{
      NormalizedAssetsManifestOptions, NormalizedMultiOutputOptions,
    },
  },
  types::{
    assets_map::{AssetKindMap, AssetsMap},
    compilation::Compilation,
    compiled_asset::CompiledAsset,
    output_options::OutputOptions,
    raw_idx::{ChunkIdx, RawIdx},
    variant_record::VariantRecord,
  },
};
