use std::path::{Path, PathBuf};

use externals::{
  Alias, AliasOptions, Command, ExternalValue, ExternalsMap, ExternalsOptions, ExternalsPlugin,
  FileSystem,
};
use externals_fs::MemoryFileSystem;
use externals_utils::indexmap::FxIndexMap;

fn externals() -> ExternalsMap {
  ExternalsMap::from_iter([
    ("vue", ExternalValue::from("Vue")),
    ("@vue/shared", ExternalValue::from(["Vue", "shared"])),
  ])
}

fn options() -> ExternalsOptions {
  ExternalsOptions { cwd: Some(PathBuf::from("/project")), ..Default::default() }
}

#[test]
fn serve_writes_stubs_and_appends_aliases() {
  let plugin = ExternalsPlugin::with_fs(externals(), options(), MemoryFileSystem::new()).unwrap();
  let mut existing = FxIndexMap::default();
  existing.insert("@".to_string(), "/project/src".to_string());

  let config = plugin.config(Command::Serve, Some(AliasOptions::Map(existing))).unwrap().unwrap();

  assert_eq!(
    config.alias,
    [
      Alias::prefix("@", "/project/src"),
      Alias::exact("vue", "/project/node_modules/.plugin-cache/vue.js"),
      Alias::exact("@vue/shared", "/project/node_modules/.plugin-cache/@vue/shared.js"),
    ]
  );
  assert_eq!(config.alias[1].find.to_regex_source(), "^vue$");

  let cache = Path::new("/project/node_modules/.plugin-cache");
  assert_eq!(
    plugin.fs().read_to_string(&cache.join("vue.js")).unwrap(),
    "module.exports = window['Vue'];"
  );
  assert_eq!(
    plugin.fs().read_to_string(&cache.join("@vue/shared.js")).unwrap(),
    "module.exports = window['Vue']['shared'];"
  );
}

#[test]
fn serve_keeps_alias_list_order() {
  let plugin = ExternalsPlugin::with_fs(externals(), options(), MemoryFileSystem::new()).unwrap();
  let existing = vec![Alias::exact("lodash", "lodash-es")];
  let config = plugin.config(Command::Serve, Some(AliasOptions::List(existing))).unwrap().unwrap();
  assert_eq!(config.alias.len(), 3);
  assert_eq!(config.alias[0], Alias::exact("lodash", "lodash-es"));

  let config = plugin.config(Command::Serve, None).unwrap().unwrap();
  assert_eq!(config.alias.len(), 2);
}

#[test]
fn regenerates_the_cache_on_every_pass() {
  let fs = MemoryFileSystem::new();
  let stale = Path::new("/project/node_modules/.plugin-cache/react.js");
  fs.create_dir_all(stale.parent().unwrap()).unwrap();
  fs.write(stale, b"module.exports = window['React'];").unwrap();

  let plugin = ExternalsPlugin::with_fs(externals(), options(), fs).unwrap();
  plugin.config(Command::Serve, None).unwrap();
  plugin.config(Command::Serve, None).unwrap();

  assert!(!plugin.fs().exists(stale));
  assert!(plugin.fs().exists(Path::new("/project/node_modules/.plugin-cache/vue.js")));
}

#[test]
fn short_circuits() {
  let plugin = ExternalsPlugin::with_fs(externals(), options(), MemoryFileSystem::new()).unwrap();
  assert!(plugin.config(Command::Build, None).unwrap().is_none());
  assert!(!plugin.fs().exists(Path::new("/project/node_modules")));

  let disabled = ExternalsPlugin::with_fs(
    externals(),
    ExternalsOptions { disable_in_serve: Some(true), ..options() },
    MemoryFileSystem::new(),
  )
  .unwrap();
  assert!(disabled.config(Command::Serve, None).unwrap().is_none());

  let empty =
    ExternalsPlugin::with_fs(ExternalsMap::default(), options(), MemoryFileSystem::new()).unwrap();
  assert!(empty.config(Command::Serve, None).unwrap().is_none());
}

#[test]
fn filesystem_errors_reach_the_host() {
  let cwd = std::env::temp_dir().join(format!("externals-config-{}", std::process::id()));
  std::fs::create_dir_all(&cwd).unwrap();
  // A file where the dependency root should be makes the cache directory impossible to create.
  std::fs::write(cwd.join("node_modules"), "").unwrap();

  let plugin = ExternalsPlugin::new(
    externals(),
    ExternalsOptions { cwd: Some(cwd.clone()), ..Default::default() },
  )
  .unwrap();
  let error = plugin.config(Command::Serve, None).unwrap_err();
  assert!(error.to_string().starts_with("Failed to create directory"), "{error}");

  std::fs::remove_dir_all(&cwd).unwrap();
}

#[test]
fn plugin_surface() {
  let plugin = ExternalsPlugin::with_fs(
    externals(),
    serde_json::from_str(r#"{ "enforce": "post", "useWindow": false }"#).unwrap(),
    MemoryFileSystem::new(),
  )
  .unwrap();
  assert_eq!(plugin.name(), "externals");
  assert_eq!(plugin.enforce().map(externals::Enforce::as_str), Some("post"));
  assert!(!plugin.options().use_window);
}
