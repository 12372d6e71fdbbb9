use multipack_common::Compilation;

use crate::{HookUsage, SharedPlugin};

/// Dispatches hooks to registered plugins in phase order. Hook failures are
/// forwarded into the compilation's error channel; the build continues and
/// the host marks it failed.
pub struct PluginDriver {
  plugins: Vec<SharedPlugin>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<SharedPlugin>) -> Self {
    Self { plugins }
  }

  pub async fn compilation_start(&self, compilation: &mut Compilation) {
    for plugin in &self.plugins {
      if !plugin.register_hook_usage().contains(HookUsage::CompilationStart) {
        continue;
      }
      if let Err(errors) = plugin.compilation_start(compilation).await {
        compilation.errors.extend(errors.0);
      }
    }
  }

  pub async fn optimize_assets(&self, compilation: &mut Compilation) {
    for plugin in &self.plugins {
      if !plugin.register_hook_usage().contains(HookUsage::OptimizeAssets) {
        continue;
      }
      if let Err(errors) = plugin.optimize_assets(compilation).await {
        compilation.errors.extend(errors.0);
      }
    }
  }

  pub async fn finalize_assets(&self, compilation: &mut Compilation) {
    for plugin in &self.plugins {
      if !plugin.register_hook_usage().contains(HookUsage::FinalizeAssets) {
        continue;
      }
      if let Err(errors) = plugin.finalize_assets(compilation).await {
        compilation.errors.extend(errors.0);
      }
    }
  }

  pub async fn after_emit(&self, compilation: &mut Compilation) {
    for plugin in &self.plugins {
      if !plugin.register_hook_usage().contains(HookUsage::AfterEmit) {
        continue;
      }
      if let Err(errors) = plugin.after_emit(compilation).await {
        compilation.errors.extend(errors.0);
      }
    }
  }
}
