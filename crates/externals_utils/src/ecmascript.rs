use oxc::syntax::identifier;

use crate::concat_string;

pub fn is_validate_identifier_name(name: &str) -> bool {
  identifier::is_identifier_name(name)
}

/// `obj.prop` when `prop` is an identifier name, `obj["prop"]` otherwise.
pub fn property_access_str(obj: &str, prop: &str) -> String {
  if is_validate_identifier_name(prop) {
    concat_string!(obj, ".", prop)
  } else {
    concat_string!(obj, "[", to_double_quoted(prop), "]")
  }
}

/// Always `obj['prop']`, regardless of whether `prop` is an identifier.
pub fn bracket_access_str(obj: &str, prop: &str) -> String {
  concat_string!(obj, "[", to_single_quoted(prop), "]")
}

pub fn to_single_quoted(value: &str) -> String {
  let mut quoted = String::with_capacity(value.len() + 2);
  quoted.push('\'');
  for char in value.chars() {
    match char {
      '\\' => quoted.push_str("\\\\"),
      '\'' => quoted.push_str("\\'"),
      '\n' => quoted.push_str("\\n"),
      '\r' => quoted.push_str("\\r"),
      _ => quoted.push(char),
    }
  }
  quoted.push('\'');
  quoted
}

pub fn to_double_quoted(value: &str) -> String {
  serde_json::to_string(value).unwrap_or_else(|_| concat_string!("\"", value, "\""))
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("foo"));
  assert!(is_validate_identifier_name("$"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name("a-b"));
  assert!(!is_validate_identifier_name("😈"));
}

#[test]
fn test_property_access_str() {
  assert_eq!(property_access_str("window['Vue']", "ref"), "window['Vue'].ref");
  assert_eq!(property_access_str("Vue", "a-b"), "Vue[\"a-b\"]");
}

#[test]
fn test_bracket_access_str() {
  assert_eq!(bracket_access_str("window", "Vue"), "window['Vue']");
  assert_eq!(bracket_access_str("window", "it's"), "window['it\\'s']");
  assert_eq!(bracket_access_str("window", "a\\b"), "window['a\\\\b']");
}
