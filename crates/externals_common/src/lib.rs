mod constants;
mod options;
mod types;

pub use crate::{
  constants::{CACHE_DIR_NAME, DEPENDENCY_ROOT, GLOBAL_OBJECT},
  options::{
    command::Command, enforce::Enforce, module_filter::ModuleFilter,
    normalized_options::NormalizedOptions, source_map_options::SourceMapOptions,
    ExternalsOptions,
  },
  types::{
    alias::{Alias, AliasFind, AliasOptions, ResolveConfig},
    external_value::ExternalValue,
    externals_map::ExternalsMap,
    import_kind::ImportKind,
    module_id::ModuleId,
    module_type::ModuleType,
    specifier::Specifier,
  },
};
