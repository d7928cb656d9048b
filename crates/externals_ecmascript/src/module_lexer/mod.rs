mod import_record;
mod scanner;

use externals_error::ExternalsError;
use memchr::memmem::Finder;
use oxc::span::SourceType;
use tokio::sync::OnceCell;

use crate::EcmaCompiler;

pub use self::{import_record::ImportRecord, scanner::ImportScanner};

static MODULE_LEXER: OnceCell<ModuleLexer> = OnceCell::const_new();

/// Finds the static import and re-export declarations of a module. Built once per process,
/// see [ModuleLexer::init].
pub struct ModuleLexer {
  import_finder: Finder<'static>,
  export_finder: Finder<'static>,
}

impl ModuleLexer {
  /// Resolves to the process-wide lexer, building it on first use. Concurrent callers all wait
  /// for the same initialization.
  pub async fn init() -> &'static Self {
    MODULE_LEXER.get_or_init(|| async { Self::new() }).await
  }

  fn new() -> Self {
    Self { import_finder: Finder::new(b"import"), export_finder: Finder::new(b"export") }
  }

  /// Parses `source` and hands `func` a lazy scanner over its declarations in source order.
  ///
  /// Sources without the `import` or `export` keyword are never parsed. Dynamic `import()`
  /// is an expression, not a declaration, so it never shows up in the scan.
  pub fn scan_with<Ret>(
    &self,
    source: &str,
    source_type: SourceType,
    func: impl FnOnce(ImportScanner<'_, '_>) -> Ret,
  ) -> Result<Ret, ExternalsError> {
    if !self.may_contain_module_syntax(source) {
      return Ok(func(ImportScanner::empty()));
    }
    EcmaCompiler::parse_module_with(source, source_type, |program| {
      func(ImportScanner::new(program))
    })
  }

  fn may_contain_module_syntax(&self, source: &str) -> bool {
    let bytes = source.as_bytes();
    self.import_finder.find(bytes).is_some() || self.export_finder.find(bytes).is_some()
  }
}


#[test]
fn test_may_contain_module_syntax() {
  let lexer = ModuleLexer::new();
  assert!(lexer.may_contain_module_syntax("import a from 'a'"));
  assert!(lexer.may_contain_module_syntax("export * from 'a'"));
  assert!(!lexer.may_contain_module_syntax("const a = require('a')"));
}

#[test]
fn test_skips_parsing_without_keywords() {
  let lexer = ModuleLexer::new();
  // Not valid in any source type, but there is nothing to look for.
  let count = lexer
    .scan_with("const a = require('a') <<<", SourceType::default(), |records| records.count())
    .unwrap();
  assert_eq!(count, 0);
  assert!(lexer.scan_with("import { a, , b } from 'a'", SourceType::default(), |_| ()).is_err());
}
