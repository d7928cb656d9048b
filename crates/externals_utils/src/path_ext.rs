use std::path::Path;

pub trait PathExt {
  /// Whether any component of the path is exactly `dir_name`.
  fn has_component(&self, dir_name: &str) -> bool;
}

impl PathExt for Path {
  fn has_component(&self, dir_name: &str) -> bool {
    self.components().any(|component| component.as_os_str() == dir_name)
  }
}

#[test]
fn test_has_component() {
  let path = Path::new("/project/node_modules/.plugin-cache/vue.js");
  assert!(path.has_component("node_modules"));
  assert!(path.has_component(".plugin-cache"));
  assert!(!Path::new("/project/src/node_modules_like/vue.js").has_component("node_modules"));
}
