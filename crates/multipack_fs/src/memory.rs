use std::{
  io::{Read, Write},
  path::Path,
};

use vfs::{MemoryFS, VfsPath};

use crate::FileSystem;

/// In-memory file system for hermetic tests.
#[derive(Clone)]
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl MemoryFileSystem {
  pub fn new() -> Self {
    Self { root: MemoryFS::new().into() }
  }

  /// Seed the file system, creating parent directories as needed.
  pub fn with_files(files: &[(&str, &str)]) -> Self {
    let fs = Self::new();
    for (path, content) in files {
      fs.write(Path::new(path), content.as_bytes()).unwrap_or_else(|err| {
        panic!("Failed to seed {path}: {err}");
      });
    }
    fs
  }

  fn vfs_path(&self, path: &Path) -> anyhow::Result<VfsPath> {
    // `VfsPath::join` rejects absolute segments, so paths are normalized to
    // slash-separated relative form against the memory root.
    let normalized = path.to_string_lossy().replace('\\', "/");
    Ok(self.root.join(normalized.trim_start_matches('/'))?)
  }
}

impl FileSystem for MemoryFileSystem {
  fn exists(&self, path: &Path) -> bool {
    self.vfs_path(path).and_then(|p| Ok(p.exists()?)).unwrap_or(false)
  }

  fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
    let mut content = String::new();
    self.vfs_path(path)?.open_file()?.read_to_string(&mut content)?;
    Ok(content)
  }

  fn write(&self, path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let target = self.vfs_path(path)?;
    target.parent().create_dir_all()?;
    target.create_file()?.write_all(content)?;
    Ok(())
  }

  fn create_dir_all(&self, path: &Path) -> anyhow::Result<()> {
    Ok(self.vfs_path(path)?.create_dir_all()?)
  }
}
