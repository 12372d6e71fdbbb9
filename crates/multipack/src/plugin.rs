use std::{
  borrow::Cow,
  sync::{Arc, Mutex, MutexGuard},
};

use futures::future::BoxFuture;
use multipack_common::{
  ChunkIdx, Compilation, MultiOutputOptions, NormalizedMultiOutputOptions, VariantRecord,
};
use multipack_error::BuildResult;
use multipack_fs::FileSystem;
use multipack_plugin::{HookUsage, Plugin};

use crate::{
  SharedOptions, errors,
  registry::VariantResourceRegistry,
  resolve::ResourceResolver,
  stages::{emit_manifest, expand_chunks, reconcile_filenames, scan_chunks},
  utils::normalize_options::normalize_options,
};

/// Per-compilation phases, strictly ordered. `Error` is reached when the host
/// dispatches hooks out of phase order; the plugin then stays inert for the
/// rest of the compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  Idle,
  Scanning,
  Expanding,
  Reconciling,
  Manifesting,
  Done,
  Error,
}

impl Phase {
  fn as_str(self) -> &'static str {
    match self {
      Phase::Idle => "idle",
      Phase::Scanning => "scanning",
      Phase::Expanding => "expanding",
      Phase::Reconciling => "reconciling",
      Phase::Manifesting => "manifesting",
      Phase::Done => "done",
      Phase::Error => "error",
    }
  }
}

struct ExpansionState {
  phase: Phase,
  /// Invalid options make the whole compilation a no-op; phases still advance
  /// to `Done` so the recoverable-error contract holds.
  inert: bool,
  records: Vec<VariantRecord>,
  variant_chunks: Vec<ChunkIdx>,
}

impl Default for ExpansionState {
  fn default() -> Self {
    Self { phase: Phase::Idle, inert: false, records: Vec::new(), variant_chunks: Vec::new() }
  }
}

/// The asset-variant expansion engine, wired into the host's extension
/// points: expansion at `optimize_assets`, filename reconciliation at
/// `finalize_assets`, manifest emission at `after_emit`.
pub struct MultiOutputPlugin<F: FileSystem> {
  fs: Arc<F>,
  options: SharedOptions,
  resolver: ResourceResolver<F>,
  state: Mutex<ExpansionState>,
}

impl<F: FileSystem> MultiOutputPlugin<F> {
  pub fn new(raw_options: MultiOutputOptions, fs: Arc<F>) -> Self {
    let options: SharedOptions = Arc::new(normalize_options(raw_options));
    let resolver = ResourceResolver::new(Arc::clone(&fs), options.minify);
    Self { fs, options, resolver, state: Mutex::new(ExpansionState::default()) }
  }

  pub fn options(&self) -> &NormalizedMultiOutputOptions {
    &self.options
  }

  /// The capability object the host passes to its loader layer.
  pub fn registry(&self) -> VariantResourceRegistry<F> {
    VariantResourceRegistry::new(Arc::clone(&self.fs))
  }

  fn lock_state(&self) -> MutexGuard<'_, ExpansionState> {
    self.state.lock().expect("expansion state poisoned")
  }

  /// Checked phase transition. On a violation the error is reported and the
  /// state machine parks in `Error`.
  fn enter(
    &self,
    compilation: &mut Compilation,
    hook: &'static str,
    expected: Phase,
    next: Phase,
  ) -> Option<MutexGuard<'_, ExpansionState>> {
    let mut state = self.lock_state();
    if state.phase != expected {
      compilation.push_error(errors::hook_order_violation(hook, state.phase.as_str()));
      state.phase = Phase::Error;
      return None;
    }
    state.phase = next;
    Some(state)
  }
}

impl<F: FileSystem + 'static> Plugin for MultiOutputPlugin<F> {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("multipack:multi-output")
  }

  fn register_hook_usage(&self) -> HookUsage {
    HookUsage::CompilationStart
      | HookUsage::OptimizeAssets
      | HookUsage::FinalizeAssets
      | HookUsage::AfterEmit
  }

  fn compilation_start<'a>(
    &'a self,
    compilation: &'a mut Compilation,
  ) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async move {
      let mut state = self.lock_state();
      *state = ExpansionState::default();

      // Options are validated once per compilation; failures are recoverable.
      if self.options.values.is_empty() {
        compilation.push_error(errors::invalid_values_option());
        state.inert = true;
      }
      if !self.options.filename.contains("[value]") {
        compilation.push_error(errors::invalid_filename_template(&self.options.filename));
        state.inert = true;
      }
      Ok(())
    })
  }

  fn optimize_assets<'a>(
    &'a self,
    compilation: &'a mut Compilation,
  ) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async move {
      let inert = {
        let Some(state) = self.enter(compilation, "optimize_assets", Phase::Idle, Phase::Scanning)
        else {
          return Ok(());
        };
        state.inert
      };

      let scanned =
        if inert { Vec::new() } else { scan_chunks(compilation, self.options.ultra_debug) };
      self.lock_state().phase = Phase::Expanding;
      if inert {
        return Ok(());
      }

      // The state lock is never held across this join.
      let output = expand_chunks(compilation, &scanned, &self.options, &self.resolver).await;

      let mut state = self.lock_state();
      state.records = output.records;
      state.variant_chunks = output.variant_chunks;
      Ok(())
    })
  }

  fn finalize_assets<'a>(
    &'a self,
    compilation: &'a mut Compilation,
  ) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async move {
      let Some(mut state) =
        self.enter(compilation, "finalize_assets", Phase::Expanding, Phase::Reconciling)
      else {
        return Ok(());
      };
      if !state.inert {
        let ExpansionState { records, variant_chunks, .. } = &mut *state;
        reconcile_filenames(compilation, records, variant_chunks, &self.options);
      }
      Ok(())
    })
  }

  fn after_emit<'a>(&'a self, compilation: &'a mut Compilation) -> BoxFuture<'a, BuildResult<()>> {
    Box::pin(async move {
      let Some(mut state) =
        self.enter(compilation, "after_emit", Phase::Reconciling, Phase::Manifesting)
      else {
        return Ok(());
      };
      // An inert compilation still emits its (empty) manifest, matching the
      // recoverable-config-error contract.
      emit_manifest(compilation, &state.records, &self.options, self.fs.as_ref());
      state.phase = Phase::Done;
      Ok(())
    })
  }
}
