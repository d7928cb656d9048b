use externals_common::{ExternalsOptions, NormalizedOptions};

use crate::filter::default_filter;

pub fn normalize_options(raw_options: ExternalsOptions) -> NormalizedOptions {
  NormalizedOptions {
    disable_ssr: raw_options.disable_ssr.unwrap_or(true),
    disable_in_serve: raw_options.disable_in_serve.unwrap_or(false),
    use_window: raw_options.use_window.unwrap_or(true),
    filter: raw_options.filter.unwrap_or_else(default_filter),
    source_map: raw_options.source_map_options.unwrap_or_default(),
    debug: raw_options.debug.unwrap_or(false),
    enforce: raw_options.enforce,
    // An empty path keeps the cache relative to the process' working directory.
    cwd: raw_options.cwd.or_else(|| std::env::current_dir().ok()).unwrap_or_default(),
  }
}

#[test]
fn test_defaults() {
  let options = normalize_options(ExternalsOptions::default());
  assert!(options.disable_ssr);
  assert!(!options.disable_in_serve);
  assert!(options.use_window);
  assert!(!options.debug);
  assert!(options.hires());
  assert!(options.enforce.is_none());
  assert!(options.filter.call("", "/src/main.js", false, false));
}
