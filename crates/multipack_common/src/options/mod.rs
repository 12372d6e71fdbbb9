pub mod normalized_multi_output_options;

use std::path::PathBuf;

/// Raw per-plugin-instance configuration, merged with defaults by
/// `normalize_options`.
#[derive(Default, Debug, Clone)]
pub struct MultiOutputOptions {
  /// Variant identifiers the build fans out over, e.g. locale codes.
  /// Required; an empty or missing list is a recoverable build error.
  pub values: Option<Vec<String>>,
  /// Variant filename template; must contain `[value]`. May also carry
  /// `[name]` and `[contenthash]`.
  pub filename: Option<String>,
  /// Manifest emission; `None` disables it.
  pub assets: Option<AssetsManifestOptions>,
  pub debug: Option<bool>,
  pub ultra_debug: Option<bool>,
  /// Re-serialize resolved JSON resource content compactly.
  pub minify: Option<bool>,
}

#[derive(Default, Debug, Clone)]
pub struct AssetsManifestOptions {
  /// Manifest filename template; one file per value when it contains `[value]`.
  pub filename: Option<String>,
  /// Output directory, created if missing.
  pub path: Option<PathBuf>,
  pub pretty_print: Option<bool>,
}
