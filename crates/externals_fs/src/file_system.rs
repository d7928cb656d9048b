use std::{io, path::Path};

/// The filesystem operations needed to materialize generated stub modules.
pub trait FileSystem: Send + Sync {
  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

  /// Creates or truncates the file. The parent directory must exist.
  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn exists(&self, path: &Path) -> bool;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
