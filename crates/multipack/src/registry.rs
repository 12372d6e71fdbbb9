use std::{
  path::Path,
  sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
  },
};

use multipack_common::marker;
use multipack_fs::FileSystem;

use crate::errors;

/// Capability object the host hands to its loader layer so a loader can mark
/// a module as value-dependent, instead of probing ad hoc sentinel flags on a
/// shared compilation object.
pub struct VariantResourceRegistry<F: FileSystem> {
  fs: Arc<F>,
  registered: AtomicUsize,
}

impl<F: FileSystem> VariantResourceRegistry<F> {
  pub fn new(fs: Arc<F>) -> Self {
    Self { fs, registered: AtomicUsize::new(0) }
  }

  /// Validates that the canonical resource exists at build time and returns
  /// the module stub line embedding the marker.
  pub fn register(&self, resource_path: &str) -> anyhow::Result<String> {
    if !self.fs.exists(Path::new(resource_path)) {
      return Err(errors::unknown_resource(resource_path));
    }
    self.registered.fetch_add(1, Ordering::Relaxed);
    Ok(format!("exports.default = \"{}\";", marker::resource_marker(resource_path)))
  }

  /// Number of modules registered so far, for diagnostics.
  pub fn registered_count(&self) -> usize {
    self.registered.load(Ordering::Relaxed)
  }
}
