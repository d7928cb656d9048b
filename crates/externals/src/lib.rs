mod dev_cache;
mod filter;
mod module_name;
mod plugin;
mod require;
mod rewrite;
mod types;
mod utils;

pub use crate::{
  dev_cache::{cache_dir, materialize_stubs},
  filter::{default_filter, should_rewrite},
  module_name::ModuleNameResolver,
  plugin::ExternalsPlugin,
  require::{rewrite_requires, RequireRewriter},
  rewrite::render_specifiers,
  types::transform_output::TransformOutput,
};
pub use externals_common::*;
pub use externals_error::{BuildError, BuildResult, ExternalsError};
pub use externals_fs::{FileSystem, OsFileSystem};
pub use externals_sourcemap::SourceMap;
