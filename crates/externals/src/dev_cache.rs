use std::path::{Path, PathBuf};

use externals_common::{Alias, ExternalsMap, CACHE_DIR_NAME, DEPENDENCY_ROOT};
use externals_error::ExternalsError;
use externals_fs::FileSystem;
use externals_utils::concat_string;
use sugar_path::SugarPath;

use crate::module_name::ModuleNameResolver;

pub fn cache_dir(cwd: &Path) -> PathBuf {
  cwd.join(DEPENDENCY_ROOT).join(CACHE_DIR_NAME)
}

/// Regenerates the stub cache: empties `cache_dir`, then writes `<key>.js` containing
/// `module.exports = <expr>;` for every external, one after another.
///
/// Returns one exact-match alias per external pointing at its stub, in key order.
pub fn materialize_stubs<F: FileSystem>(
  fs: &F,
  cache_dir: &Path,
  externals: &ExternalsMap,
  resolver: ModuleNameResolver,
) -> Result<Vec<Alias>, ExternalsError> {
  if fs.exists(cache_dir) {
    fs.remove_dir_all(cache_dir)
      .map_err(|err| ExternalsError::filesystem("empty directory", cache_dir, err))?;
  }
  fs.create_dir_all(cache_dir)
    .map_err(|err| ExternalsError::filesystem("create directory", cache_dir, err))?;

  let mut aliases = Vec::with_capacity(externals.len());
  for (key, value) in externals.iter() {
    let stub_path = cache_dir.join(concat_string!(key, ".js"));
    // Scoped packages such as `@vue/shared` live in a nested directory.
    if let Some(parent) = stub_path.parent().filter(|parent| *parent != cache_dir) {
      fs.create_dir_all(parent)
        .map_err(|err| ExternalsError::filesystem("create directory", parent, err))?;
    }
    let content = concat_string!("module.exports = ", resolver.resolve(value), ";");
    fs.write(&stub_path, content.as_bytes())
      .map_err(|err| ExternalsError::filesystem("write", &stub_path, err))?;
    tracing::debug!(target: "externals", key, path = %stub_path.display(), "Wrote external stub");
    aliases.push(Alias::exact(key, stub_path.to_slash_lossy()));
  }
  Ok(aliases)
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use externals_common::{Alias, ExternalValue, ExternalsMap};
  use externals_fs::{FileSystem, MemoryFileSystem};

  use super::{cache_dir, materialize_stubs};
  use crate::module_name::ModuleNameResolver;

  #[test]
  fn writes_one_stub_per_external() {
    let fs = MemoryFileSystem::new();
    let dir = cache_dir(Path::new("/project"));
    assert_eq!(dir, Path::new("/project/node_modules/.plugin-cache"));

    let externals = ExternalsMap::from_iter([
      ("vue", ExternalValue::from("Vue")),
      ("@vue/shared", ExternalValue::from(["Vue", "shared"])),
    ]);
    let aliases = materialize_stubs(&fs, &dir, &externals, ModuleNameResolver::new(true)).unwrap();

    assert_eq!(
      aliases,
      [
        Alias::exact("vue", "/project/node_modules/.plugin-cache/vue.js"),
        Alias::exact("@vue/shared", "/project/node_modules/.plugin-cache/@vue/shared.js"),
      ]
    );
    assert_eq!(fs.read_to_string(&dir.join("vue.js")).unwrap(), "module.exports = window['Vue'];");
    assert_eq!(
      fs.read_to_string(&dir.join("@vue/shared.js")).unwrap(),
      "module.exports = window['Vue']['shared'];"
    );
  }

  #[test]
  fn clears_previous_stubs() {
    let fs = MemoryFileSystem::new();
    let dir = cache_dir(Path::new("/project"));
    fs.create_dir_all(&dir).unwrap();
    fs.write(&dir.join("react.js"), b"module.exports = window['React'];").unwrap();

    let externals = ExternalsMap::from_iter([("vue", "Vue")]);
    materialize_stubs(&fs, &dir, &externals, ModuleNameResolver::new(false)).unwrap();

    assert!(!fs.exists(&dir.join("react.js")));
    assert_eq!(fs.read_to_string(&dir.join("vue.js")).unwrap(), "module.exports = Vue;");
  }
}
