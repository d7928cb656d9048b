use externals_utils::{concat_string, indexmap::FxIndexMap};

/// How an alias matches an import specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasFind {
  /// Matches the specifier itself or any subpath of it (`vue` matches `vue/dist/vue.js`).
  Prefix(String),
  /// Matches only the exact specifier, equivalent to the regex `^specifier$`.
  Exact(String),
}

impl AliasFind {
  /// Regex source a host that only understands regex aliases can use.
  pub fn to_regex_source(&self) -> String {
    match self {
      Self::Prefix(find) => concat_string!("^", regex::escape(find), "(?:/.*)?$"),
      Self::Exact(find) => concat_string!("^", regex::escape(find), "$"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
  pub find: AliasFind,
  pub replacement: String,
}

impl Alias {
  pub fn prefix(find: impl Into<String>, replacement: impl Into<String>) -> Self {
    Self { find: AliasFind::Prefix(find.into()), replacement: replacement.into() }
  }

  pub fn exact(find: impl Into<String>, replacement: impl Into<String>) -> Self {
    Self { find: AliasFind::Exact(find.into()), replacement: replacement.into() }
  }
}

/// Alias configuration as the host holds it: either a `find -> replacement` object or an
/// ordered list.
#[derive(Debug, Clone)]
pub enum AliasOptions {
  Map(FxIndexMap<String, String>),
  List(Vec<Alias>),
}

impl AliasOptions {
  pub fn into_list(self) -> Vec<Alias> {
    match self {
      Self::Map(map) => {
        map.into_iter().map(|(find, replacement)| Alias::prefix(find, replacement)).collect()
      }
      Self::List(list) => list,
    }
  }
}

impl Default for AliasOptions {
  fn default() -> Self {
    Self::List(Vec::new())
  }
}

/// The part of the host configuration the config hook hands back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveConfig {
  pub alias: Vec<Alias>,
}

#[test]
fn test_regex_source() {
  assert_eq!(AliasFind::Exact("vue".to_string()).to_regex_source(), "^vue$");
  assert_eq!(
    AliasFind::Exact("lodash.merge".to_string()).to_regex_source(),
    "^lodash\\.merge$"
  );
  assert_eq!(AliasFind::Prefix("@".to_string()).to_regex_source(), "^@(?:/.*)?$");
}

#[test]
fn test_map_into_list_keeps_order() {
  let mut map = FxIndexMap::default();
  map.insert("@".to_string(), "/src".to_string());
  map.insert("~".to_string(), "/assets".to_string());
  let list = AliasOptions::Map(map).into_list();
  assert_eq!(list, vec![Alias::prefix("@", "/src"), Alias::prefix("~", "/assets")]);
}
