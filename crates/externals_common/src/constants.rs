/// Directory name that marks installed dependency code.
pub const DEPENDENCY_ROOT: &str = "node_modules";

/// Directory under [DEPENDENCY_ROOT] that holds the generated stub modules.
pub const CACHE_DIR_NAME: &str = ".plugin-cache";

/// Object that owns the globals when `use_window` is enabled.
pub const GLOBAL_OBJECT: &str = "window";
