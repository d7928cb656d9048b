use externals_error::ExternalsError;
use oxc::{allocator::Allocator, ast::ast::Program, parser::Parser, span::SourceType};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses one isolated statement and hands the program to `func`. Any diagnostic rejects the
  /// statement. The AST lives in an allocator owned by this call, so only owned data can leave
  /// the closure.
  pub fn parse_with<Ret>(
    source: &str,
    source_type: SourceType,
    func: impl FnOnce(&Program<'_>) -> Ret,
  ) -> Result<Ret, ExternalsError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if ret.panicked || !ret.errors.is_empty() {
      return Err(ExternalsError::statement_parse(source, format!("{:?}", ret.errors)));
    }
    Ok(func(&ret.program))
  }

  /// Parses a whole module. Recoverable diagnostics (strict mode violations in legacy
  /// dependency code, duplicate exports) still leave a complete program and are ignored. Only
  /// a parse that had to stop early is an error.
  pub fn parse_module_with<Ret>(
    source: &str,
    source_type: SourceType,
    func: impl FnOnce(&Program<'_>) -> Ret,
  ) -> Result<Ret, ExternalsError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if ret.panicked {
      return Err(ExternalsError::module_parse(format!("{:?}", ret.errors)));
    }
    Ok(func(&ret.program))
  }
}

#[test]
fn basic_test() {
  let count = EcmaCompiler::parse_with(
    "import Vue from 'vue'",
    SourceType::default().with_module(true),
    |program| program.body.len(),
  )
  .unwrap();
  assert_eq!(count, 1);

  let error =
    EcmaCompiler::parse_with("import { from 'vue'", SourceType::default().with_module(true), |_| ())
      .unwrap_err();
  assert!(error.is_statement_level());
}

#[test]
fn module_parse_tolerates_recoverable_errors() {
  let module = SourceType::default().with_module(true);
  let count =
    EcmaCompiler::parse_module_with("with (a) {}\nexport * from 'b'", module, |program| {
      program.body.len()
    })
    .unwrap();
  assert_eq!(count, 2);

  let error = EcmaCompiler::parse_module_with("import { a, , b } from 'vue'", module, |_| ())
    .unwrap_err();
  assert!(!error.is_statement_level());
}
