use std::path::PathBuf;

use crate::{Enforce, ModuleFilter, SourceMapOptions};

#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug)]
pub struct NormalizedOptions {
  pub disable_ssr: bool,
  pub disable_in_serve: bool,
  pub use_window: bool,
  pub filter: ModuleFilter,
  pub source_map: SourceMapOptions,
  pub debug: bool,
  pub enforce: Option<Enforce>,
  pub cwd: PathBuf,
}

impl NormalizedOptions {
  pub fn hires(&self) -> bool {
    self.source_map.hires.unwrap_or(true)
  }
}
