use std::path::Path;

use anyhow::anyhow;

pub fn invalid_values_option() -> anyhow::Error {
  anyhow!("[multipack] option \"values\" must be a list of length >= 1")
}

pub fn invalid_filename_template(template: &str) -> anyhow::Error {
  anyhow!("[multipack] variant filename template {template:?} must contain \"[value]\"")
}

pub fn resolution_failure(
  resource_path: &str,
  value: &str,
  source: &anyhow::Error,
) -> anyhow::Error {
  anyhow!("[multipack] failed to resolve resource {resource_path} for value {value}: {source}")
}

pub fn minify_failure(
  resource_path: &str,
  value: &str,
  source: &serde_json::Error,
) -> anyhow::Error {
  anyhow!("[multipack] failed to minify resource {resource_path} for value {value}: {source}")
}

pub fn missing_compiled_asset(filename: &str, value: &str) -> anyhow::Error {
  anyhow!("[multipack] compiled asset {filename} disappeared before expansion for value {value}")
}

pub fn unknown_resource(resource_path: &str) -> anyhow::Error {
  anyhow!("[multipack] value-dependent resource {resource_path} does not exist")
}

pub fn hook_order_violation(hook: &str, phase: &str) -> anyhow::Error {
  anyhow!("[multipack] hook {hook} invoked while in phase {phase}")
}

pub fn manifest_write_failure(path: &Path, source: &anyhow::Error) -> anyhow::Error {
  anyhow!("[multipack] failed to write asset manifest {}: {source}", path.display())
}
