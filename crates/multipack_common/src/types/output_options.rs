/// The slice of the host's output configuration the engine reads.
#[derive(Debug, Default, Clone)]
pub struct OutputOptions {
  /// Prefix prepended to every file path recorded in the manifest.
  pub public_path: String,
}
