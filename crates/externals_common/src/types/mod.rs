pub mod alias;
pub mod external_value;
pub mod externals_map;
pub mod import_kind;
pub mod module_id;
pub mod module_type;
pub mod specifier;
