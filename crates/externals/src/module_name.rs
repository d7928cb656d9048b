use externals_common::{ExternalValue, GLOBAL_OBJECT};
use externals_utils::ecmascript::bracket_access_str;

/// Turns an external value into the expression that reads it at runtime.
#[derive(Debug, Clone, Copy)]
pub struct ModuleNameResolver {
  use_window: bool,
}

impl ModuleNameResolver {
  pub fn new(use_window: bool) -> Self {
    Self { use_window }
  }

  /// - `use_window`: `"Vue"` => `window['Vue']`, `["$", "Vue"]` => `window['$']['Vue']`
  /// - otherwise: `"Vue"` => `Vue`, `["$", "Vue"]` => `$.Vue`
  pub fn resolve(self, value: &ExternalValue) -> String {
    let segments = value.segments();
    if self.use_window {
      segments
        .iter()
        .fold(GLOBAL_OBJECT.to_string(), |expr, segment| bracket_access_str(&expr, segment))
    } else {
      segments.join(".")
    }
  }
}

#[test]
fn test_resolve_with_window() {
  let resolver = ModuleNameResolver::new(true);
  assert_eq!(resolver.resolve(&"Vue".into()), "window['Vue']");
  assert_eq!(resolver.resolve(&["$", "Vue"].into()), "window['$']['Vue']");
  assert_eq!(resolver.resolve(&"lodash-es".into()), "window['lodash-es']");
  assert_eq!(resolver.resolve(&ExternalValue::Path(Vec::new())), "window");
}

#[test]
fn test_resolve_without_window() {
  let resolver = ModuleNameResolver::new(false);
  assert_eq!(resolver.resolve(&"Vue".into()), "Vue");
  assert_eq!(resolver.resolve(&["$", "Vue"].into()), "$.Vue");
}
