use std::{borrow::Cow, sync::Arc};

use futures::future::BoxFuture;
use multipack_common::Compilation;
use multipack_error::BuildResult;

pub type SharedPlugin = Arc<dyn Plugin>;

bitflags::bitflags! {
  /// The extension points a plugin participates in. Hooks outside the
  /// declared set are never dispatched.
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  pub struct HookUsage: u8 {
    const CompilationStart = 1;
    const OptimizeAssets = 1 << 1;
    const FinalizeAssets = 1 << 2;
    const AfterEmit = 1 << 3;
  }
}

/// Host extension points, dispatched in phase order by [`PluginDriver`].
///
/// The host does not advance to the next phase until the returned future
/// resolves, so a hook must fully join any asynchronous fan-out it spawns
/// before completing.
///
/// [`PluginDriver`]: crate::PluginDriver
pub trait Plugin: Send + Sync + 'static {
  fn name(&self) -> Cow<'static, str>;

  fn register_hook_usage(&self) -> HookUsage;

  /// The base bundle is about to be compiled.
  fn compilation_start<'a>(
    &'a self,
    _compilation: &'a mut Compilation,
  ) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async { Ok(()) })
  }

  /// Assets are ready and about to be optimized.
  fn optimize_assets<'a>(
    &'a self,
    _compilation: &'a mut Compilation,
  ) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async { Ok(()) })
  }

  /// Assets are about to be finalized under their emitted names.
  fn finalize_assets<'a>(
    &'a self,
    _compilation: &'a mut Compilation,
  ) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async { Ok(()) })
  }

  /// All assets have been emitted.
  fn after_emit<'a>(&'a self, _compilation: &'a mut Compilation) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async { Ok(()) })
  }
}
