use std::path::Path;

/// The file system surface the engine touches: probing and reading resource
/// files, and writing manifest files.
pub trait FileSystem: Send + Sync {
  fn exists(&self, path: &Path) -> bool;

  fn read_to_string(&self, path: &Path) -> anyhow::Result<String>;

  fn write(&self, path: &Path, content: &[u8]) -> anyhow::Result<()>;

  fn create_dir_all(&self, path: &Path) -> anyhow::Result<()>;
}
