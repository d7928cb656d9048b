use externals_utils::indexmap::FxIndexMap;
use serde::Deserialize;

use super::external_value::ExternalValue;

/// Module specifier to global mapping. Lookups are exact-match only and iteration follows
/// insertion order, which keeps stub generation and require rewriting deterministic.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct ExternalsMap(FxIndexMap<String, ExternalValue>);

impl ExternalsMap {
  pub fn get(&self, specifier: &str) -> Option<&ExternalValue> {
    self.0.get(specifier)
  }

  pub fn contains_key(&self, specifier: &str) -> bool {
    self.0.contains_key(specifier)
  }

  pub fn insert(&mut self, specifier: impl Into<String>, value: impl Into<ExternalValue>) {
    self.0.insert(specifier.into(), value.into());
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &ExternalValue)> {
    self.0.iter().map(|(key, value)| (key.as_str(), value))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<K: Into<String>, V: Into<ExternalValue>> FromIterator<(K, V)> for ExternalsMap {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
  }
}

#[test]
fn test_exact_match_only() {
  let externals = ExternalsMap::from_iter([("vue", "Vue")]);
  assert!(externals.contains_key("vue"));
  assert!(externals.get("vue-router").is_none());
  assert!(externals.get("vue/dist/vue.esm").is_none());
  assert!(externals.get("Vue").is_none());
}

#[test]
fn test_deserialize_keeps_order() {
  let externals: ExternalsMap =
    serde_json::from_str(r#"{ "vue": "Vue", "jquery": ["$", "fn"], "react": "React" }"#).unwrap();
  assert_eq!(externals.keys().collect::<Vec<_>>(), ["vue", "jquery", "react"]);
  assert_eq!(externals.get("jquery"), Some(&ExternalValue::from(["$", "fn"])));
}
