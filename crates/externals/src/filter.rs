use std::sync::LazyLock;

use externals_common::{ModuleFilter, ModuleId, NormalizedOptions};
use regex::Regex;

static MODULE_ID_FILTER: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\.(mjs|js|ts|vue|jsx|tsx)(\?.*|)$").expect("Module id filter should be valid")
});

/// Whether `id` should go through the rewrite pipeline at all.
pub fn should_rewrite(
  options: &NormalizedOptions,
  code: &str,
  id: &str,
  is_build: bool,
  is_ssr: bool,
) -> bool {
  if options.disable_ssr && is_ssr {
    return false;
  }
  options.filter.call(code, id, is_ssr, is_build)
}

/// Accepts script modules by extension. Modules inside the dependency tree, which includes the
/// generated stub cache, are only accepted when building.
pub fn default_filter() -> ModuleFilter {
  ModuleFilter::new(|_code, id, _is_ssr, is_build| {
    MODULE_ID_FILTER.is_match(id) && (is_build || !ModuleId::from(id).is_in_dependency_tree())
  })
}

#[cfg(test)]
mod tests {
  use externals_common::{ExternalsOptions, ModuleFilter};

  use super::{default_filter, should_rewrite};
  use crate::utils::normalize_options::normalize_options;

  #[test]
  fn default_filter_matches_script_modules() {
    let filter = default_filter();
    assert!(filter.call("", "/src/main.ts", false, false));
    assert!(filter.call("", "/src/App.vue?vue&type=script&setup=true&lang.ts", false, false));
    assert!(filter.call("", "/src/index.mjs", false, true));
    assert!(!filter.call("", "/src/style.css", false, false));
    assert!(!filter.call("", "/src/main.ts.map", false, false));
  }

  #[test]
  fn default_filter_skips_dependencies_while_serving() {
    let filter = default_filter();
    let id = "/project/node_modules/.plugin-cache/vue.js";
    assert!(!filter.call("", id, false, false));
    assert!(filter.call("", id, false, true));
    assert!(filter.call("", "/project/node_modules/element-ui/lib/index.js", false, true));
  }

  #[test]
  fn ssr_is_rejected_before_the_filter() {
    let options = normalize_options(ExternalsOptions {
      filter: Some(ModuleFilter::new(|_, _, _, _| true)),
      ..Default::default()
    });
    assert!(!should_rewrite(&options, "", "/src/main.js", true, true));
    assert!(should_rewrite(&options, "", "/src/main.js", true, false));

    let options = normalize_options(ExternalsOptions {
      disable_ssr: Some(false),
      filter: Some(ModuleFilter::new(|_, id, is_ssr, _| is_ssr && id.contains("server"))),
      ..Default::default()
    });
    assert!(should_rewrite(&options, "", "/src/entry.server.js", false, true));
    assert!(!should_rewrite(&options, "", "/src/entry.server.js", false, false));
  }
}
