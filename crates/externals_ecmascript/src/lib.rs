mod ecma_compiler;
mod module_lexer;
mod specifier_extractor;

pub use crate::{
  ecma_compiler::EcmaCompiler,
  module_lexer::{ImportRecord, ImportScanner, ModuleLexer},
  specifier_extractor::extract_specifiers,
};
