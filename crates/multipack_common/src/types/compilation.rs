use arcstr::ArcStr;

use crate::{AssetStore, ChunkTable, OutputOptions};

/// The host surface one build exposes to plugins: the chunk list, the asset
/// collection, output options, and the per-compilation error channels.
///
/// Errors mark the build as failed without aborting it; warnings are purely
/// informational.
#[derive(Debug, Default)]
pub struct Compilation {
  pub chunks: ChunkTable,
  pub assets: AssetStore,
  pub output_options: OutputOptions,
  /// The host's compilation-wide hash token, present when its naming scheme
  /// is content addressed.
  pub hash: Option<ArcStr>,
  pub errors: Vec<anyhow::Error>,
  pub warnings: Vec<anyhow::Error>,
}

impl Compilation {
  pub fn new(
    chunks: ChunkTable,
    assets: AssetStore,
    output_options: OutputOptions,
    hash: Option<ArcStr>,
  ) -> Self {
    Self { chunks, assets, output_options, hash, errors: Vec::new(), warnings: Vec::new() }
  }

  pub fn push_error(&mut self, error: anyhow::Error) {
    self.errors.push(error);
  }

  pub fn push_warning(&mut self, warning: anyhow::Error) {
    self.warnings.push(warning);
  }
}
