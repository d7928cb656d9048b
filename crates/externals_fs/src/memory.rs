use std::{
  io::{self, Read, Write},
  path::Path,
};

use sugar_path::SugarPath;
use vfs::{FileSystem as _, MemoryFS, VfsFileType, VfsResult};

use crate::FileSystem;

/// In-memory filesystem, mostly useful for tests.
#[derive(Debug)]
pub struct MemoryFileSystem {
  fs: MemoryFS,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { fs: MemoryFS::new() }
  }
}

impl MemoryFileSystem {
  pub fn new() -> Self {
    Self::default()
  }

  fn remove_recursive(&self, path: &str) -> VfsResult<()> {
    let entries = self.fs.read_dir(path)?.collect::<Vec<_>>();
    for entry in entries {
      let child = format!("{path}/{entry}");
      match self.fs.metadata(&child)?.file_type {
        VfsFileType::Directory => self.remove_recursive(&child)?,
        VfsFileType::File => self.fs.remove_file(&child)?,
      }
    }
    self.fs.remove_dir(path)
  }
}

/// `MemoryFS` addresses entries with `/`-separated absolute paths and no trailing slash.
fn vfs_path(path: &Path) -> String {
  let slash = path.to_slash_lossy();
  let trimmed = slash.trim_end_matches('/');
  if trimmed.starts_with('/') || trimmed.is_empty() {
    trimmed.to_string()
  } else {
    format!("/{trimmed}")
  }
}

fn into_io_error(err: vfs::VfsError) -> io::Error {
  io::Error::other(err)
}

impl FileSystem for MemoryFileSystem {
  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    let path = vfs_path(path);
    let mut current = String::with_capacity(path.len());
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
      current.push('/');
      current.push_str(segment);
      if !self.fs.exists(&current).map_err(into_io_error)? {
        self.fs.create_dir(&current).map_err(into_io_error)?;
      }
    }
    Ok(())
  }

  fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
    self.remove_recursive(&vfs_path(path)).map_err(into_io_error)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = self.fs.create_file(&vfs_path(path)).map_err(into_io_error)?;
    file.write_all(content)?;
    file.flush()
  }

  fn exists(&self, path: &Path) -> bool {
    self.fs.exists(&vfs_path(path)).unwrap_or(false)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let mut file = self.fs.open_file(&vfs_path(path)).map_err(into_io_error)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::MemoryFileSystem;
  use crate::FileSystem;

  #[test]
  fn write_and_remove_nested_directories() {
    let fs = MemoryFileSystem::new();
    let cache = Path::new("/project/node_modules/.plugin-cache");
    fs.create_dir_all(&cache.join("@vue")).unwrap();
    fs.write(&cache.join("@vue/shared.js"), b"module.exports = window['VueShared'];").unwrap();
    fs.write(&cache.join("vue.js"), b"module.exports = window['Vue'];").unwrap();

    assert!(fs.exists(&cache.join("vue.js")));
    assert_eq!(
      fs.read_to_string(&cache.join("@vue/shared.js")).unwrap(),
      "module.exports = window['VueShared'];"
    );

    fs.remove_dir_all(cache).unwrap();
    assert!(!fs.exists(cache));
    assert!(!fs.exists(&cache.join("vue.js")));
    assert!(fs.exists(Path::new("/project/node_modules")));
  }

  #[test]
  fn create_dir_all_is_idempotent() {
    let fs = MemoryFileSystem::new();
    fs.create_dir_all(Path::new("/a/b/")).unwrap();
    fs.create_dir_all(Path::new("/a/b/c")).unwrap();
    assert!(fs.exists(Path::new("/a/b/c")));
  }
}
