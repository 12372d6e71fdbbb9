use std::path::PathBuf;

use arcstr::ArcStr;

/// Validated, immutable configuration for one plugin instance.
#[derive(Debug)]
pub struct NormalizedMultiOutputOptions {
  /// Distinct, order-preserving variant identifiers.
  pub values: Vec<ArcStr>,
  pub filename: String,
  pub assets: Option<NormalizedAssetsManifestOptions>,
  pub debug: bool,
  pub ultra_debug: bool,
  pub minify: bool,
}

#[derive(Debug)]
pub struct NormalizedAssetsManifestOptions {
  pub filename: String,
  pub path: PathBuf,
  pub pretty_print: bool,
}
