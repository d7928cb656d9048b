use serde::Deserialize;

/// The global a module specifier is mapped to.
///
/// - `"Vue"` reads a single global.
/// - `["$", "Vue"]` reads a property chain off the global object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ExternalValue {
  Name(String),
  Path(Vec<String>),
}

impl ExternalValue {
  pub fn segments(&self) -> &[String] {
    match self {
      Self::Name(name) => std::slice::from_ref(name),
      Self::Path(segments) => segments,
    }
  }
}

impl From<&str> for ExternalValue {
  fn from(value: &str) -> Self {
    Self::Name(value.to_string())
  }
}

impl From<String> for ExternalValue {
  fn from(value: String) -> Self {
    Self::Name(value)
  }
}

impl<S: Into<String>> From<Vec<S>> for ExternalValue {
  fn from(value: Vec<S>) -> Self {
    Self::Path(value.into_iter().map(Into::into).collect())
  }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ExternalValue {
  fn from(value: [S; N]) -> Self {
    Self::Path(value.into_iter().map(Into::into).collect())
  }
}

#[test]
fn test_deserialize_external_value() {
  let name: ExternalValue = serde_json::from_str(r#""Vue""#).unwrap();
  assert_eq!(name, ExternalValue::from("Vue"));

  let path: ExternalValue = serde_json::from_str(r#"["$", "Vue"]"#).unwrap();
  assert_eq!(path, ExternalValue::from(["$", "Vue"]));
  assert_eq!(path.segments(), ["$".to_string(), "Vue".to_string()]);
}
