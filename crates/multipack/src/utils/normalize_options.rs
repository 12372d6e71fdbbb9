use std::path::PathBuf;

use arcstr::ArcStr;
use multipack_common::{
  MultiOutputOptions, NormalizedAssetsManifestOptions, NormalizedMultiOutputOptions,
};
use multipack_utils::indexmap::FxIndexSet;

pub fn normalize_options(mut raw_options: MultiOutputOptions) -> NormalizedMultiOutputOptions {
  // Duplicate values would silently overwrite each other's assets; keep the
  // first occurrence.
  let values: Vec<ArcStr> = std::mem::take(&mut raw_options.values)
    .unwrap_or_default()
    .into_iter()
    .collect::<FxIndexSet<String>>()
    .into_iter()
    .map(ArcStr::from)
    .collect();

  let assets = raw_options.assets.map(|assets| NormalizedAssetsManifestOptions {
    filename: assets.filename.unwrap_or_else(|| "assets.json".to_string()),
    path: assets.path.unwrap_or_else(|| PathBuf::from(".")),
    pretty_print: assets.pretty_print.unwrap_or(false),
  });

  NormalizedMultiOutputOptions {
    values,
    filename: raw_options.filename.unwrap_or_else(|| "bundle-[value].js".to_string()),
    assets,
    debug: raw_options.debug.unwrap_or(false),
    ultra_debug: raw_options.ultra_debug.unwrap_or(false),
    minify: raw_options.minify.unwrap_or(false),
  }
}
