mod edit_buffer;

pub use crate::edit_buffer::{EditBuffer, EditOutput, OutputOptions};
pub use oxc_sourcemap::SourceMap;
