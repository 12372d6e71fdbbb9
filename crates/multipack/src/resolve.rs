use std::{path::Path, sync::Arc};

use multipack_fs::FileSystem;
use multipack_utils::path_ext::PathExt;

use crate::errors;

/// Decides which on-disk file supplies the content for a (resource, value)
/// pair: the value-specific sibling when one exists, else the canonical file
/// itself. Stateless; safe to invoke concurrently for different pairs.
pub struct ResourceResolver<F: FileSystem> {
  fs: Arc<F>,
  minify: bool,
}

impl<F: FileSystem> ResourceResolver<F> {
  pub fn new(fs: Arc<F>, minify: bool) -> Self {
    Self { fs, minify }
  }

  /// A missing sibling silently falls back to the canonical file; a missing
  /// or unreadable canonical file is a fatal resolution error for the pair.
  pub fn resolve(&self, canonical_path: &str, value: &str) -> anyhow::Result<String> {
    let canonical = Path::new(canonical_path);
    let candidate = canonical.value_sibling(value);
    let chosen: &Path = if self.fs.exists(&candidate) { &candidate } else { canonical };

    let content = self
      .fs
      .read_to_string(chosen)
      .map_err(|source| errors::resolution_failure(canonical_path, value, &source))?;

    if self.minify {
      let parsed: serde_json::Value = serde_json::from_str(&content)
        .map_err(|source| errors::minify_failure(canonical_path, value, &source))?;
      return Ok(parsed.to_string());
    }

    Ok(content)
  }
}
