mod errors;
mod plugin;
mod registry;
mod resolve;
mod stages;
mod transform;
mod utils;

use std::sync::Arc;

use multipack_common::NormalizedMultiOutputOptions;

pub use crate::{
  plugin::MultiOutputPlugin, registry::VariantResourceRegistry, resolve::ResourceResolver,
  transform::transform,
};
pub use multipack_common::{
  AssetStore, AssetsManifestOptions, AssetsMap, Chunk, ChunkTable, Compilation, CompiledAsset,
  MultiOutputOptions, OutputOptions, VariantRecord,
};
pub use multipack_plugin::{HookUsage, Plugin, PluginDriver, SharedPlugin};

pub type SharedOptions = Arc<NormalizedMultiOutputOptions>;
