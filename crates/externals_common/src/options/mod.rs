pub mod command;
pub mod enforce;
pub mod module_filter;
pub mod normalized_options;
pub mod source_map_options;

use std::path::PathBuf;

use serde::Deserialize;

use crate::{Enforce, ModuleFilter, SourceMapOptions};

/// User-facing options. Every field is optional, see `NormalizedOptions` for the defaults.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExternalsOptions {
  /// Skip rewriting when compiling for server-side rendering. Defaults to `true`.
  pub disable_ssr: Option<bool>,
  /// Skip both the stub cache and rewriting while serving. Defaults to `false`.
  pub disable_in_serve: Option<bool>,
  /// `window['Vue']` when `true`, bare `Vue` when `false`. Defaults to `true`.
  pub use_window: Option<bool>,
  #[serde(skip)]
  pub filter: Option<ModuleFilter>,
  pub source_map_options: Option<SourceMapOptions>,
  pub debug: Option<bool>,
  pub enforce: Option<Enforce>,
  /// Project root the stub cache is created under. Defaults to the current directory.
  pub cwd: Option<PathBuf>,
}

#[test]
fn test_deserialize_options() {
  let options: ExternalsOptions = serde_json::from_str(
    r#"{
      "disableSsr": false,
      "useWindow": false,
      "enforce": "pre",
      "sourceMapOptions": { "hires": false }
    }"#,
  )
  .unwrap();
  assert_eq!(options.disable_ssr, Some(false));
  assert_eq!(options.use_window, Some(false));
  assert_eq!(options.enforce, Some(Enforce::Pre));
  assert_eq!(options.source_map_options.and_then(|map| map.hires), Some(false));
  assert!(options.filter.is_none());

  assert!(serde_json::from_str::<ExternalsOptions>(r#"{ "useWindows": true }"#).is_err());
}
