use std::path::Path;

use arcstr::ArcStr;
use externals_utils::path_ext::PathExt;

use super::module_type::ModuleType;
use crate::DEPENDENCY_ROOT;

/// `ModuleId` is the identifier the host assigns to a module, usually an absolute path that may
/// carry a `?query` suffix (`/src/App.vue?vue&type=script&lang.ts`).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  /// The id without its query and hash suffix.
  pub fn path_part(&self) -> &str {
    let end = self.0.find(['?', '#']).unwrap_or(self.0.len());
    &self.0[..end]
  }

  pub fn module_type(&self) -> Option<ModuleType> {
    let path = self.path_part();
    path.rsplit_once('.').and_then(|(stem, ext)| {
      (!stem.is_empty() && !ext.contains('/')).then_some(ext).and_then(ModuleType::from_extension)
    })
  }

  /// Whether the module lives inside the installed dependency tree.
  pub fn is_in_dependency_tree(&self) -> bool {
    Path::new(self.path_part()).has_component(DEPENDENCY_ROOT)
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}

impl From<&str> for ModuleId {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

#[test]
fn test_module_type() {
  assert_eq!(ModuleId::from("/src/main.ts").module_type(), Some(ModuleType::Ts));
  assert_eq!(
    ModuleId::from("/src/App.vue?vue&type=script&lang.ts").module_type(),
    Some(ModuleType::Vue)
  );
  assert_eq!(ModuleId::from("/src/App.tsx#hash").module_type(), Some(ModuleType::Tsx));
  assert_eq!(ModuleId::from("/src/style.css").module_type(), None);
  assert_eq!(ModuleId::from("/src.d/README").module_type(), None);
}

#[test]
fn test_is_in_dependency_tree() {
  assert!(ModuleId::from("/project/node_modules/vue/index.js").is_in_dependency_tree());
  assert!(ModuleId::from("/project/node_modules/.plugin-cache/vue.js?v=1").is_in_dependency_tree());
  assert!(!ModuleId::from("/project/src/main.js?from=node_modules").is_in_dependency_tree());
}
