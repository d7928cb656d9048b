use serde::Deserialize;

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SourceMapOptions {
  /// One mapping per character when `true`, one per line otherwise. Defaults to `true`.
  pub hires: Option<bool>,
  /// Name recorded in `sources`. Defaults to the module id.
  pub source: Option<String>,
  pub file: Option<String>,
}
