use std::{fmt::Debug, sync::Arc};

type FilterFn = dyn Fn(&str, &str, bool, bool) -> bool + Send + Sync;

/// Decides whether a module is a rewrite candidate. Called with
/// `(source_text, module_id, is_ssr, is_build)` once per module per compilation pass, so it
/// must be pure.
#[derive(Clone)]
pub struct ModuleFilter(Arc<FilterFn>);

impl ModuleFilter {
  pub fn new(filter: impl Fn(&str, &str, bool, bool) -> bool + Send + Sync + 'static) -> Self {
    Self(Arc::new(filter))
  }

  pub fn call(&self, code: &str, id: &str, is_ssr: bool, is_build: bool) -> bool {
    (self.0)(code, id, is_ssr, is_build)
  }
}

impl Debug for ModuleFilter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("ModuleFilter(Fn)")
  }
}
