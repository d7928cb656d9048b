use std::slice;

use externals_common::ImportKind;
use oxc::{
  ast::ast::{ModuleDeclaration, Program, Statement},
  span::Span,
};

use super::ImportRecord;

/// Lazily walks the top-level statements of a parsed program, yielding one record per
/// declaration that names a module source.
pub struct ImportScanner<'p, 'a> {
  statements: slice::Iter<'p, Statement<'a>>,
}

impl<'p, 'a> ImportScanner<'p, 'a> {
  pub(super) fn new(program: &'p Program<'a>) -> Self {
    Self { statements: program.body.iter() }
  }

  pub(super) fn empty() -> Self {
    Self { statements: slice::Iter::default() }
  }
}

impl<'p> Iterator for ImportScanner<'p, '_> {
  type Item = ImportRecord<'p>;

  fn next(&mut self) -> Option<Self::Item> {
    self.statements.find_map(|stmt| {
      let (kind, statement, source, with_clause) = match stmt.as_module_declaration()? {
        ModuleDeclaration::ImportDeclaration(decl) => {
          (ImportKind::Import, decl.span, &decl.source, &decl.with_clause)
        }
        ModuleDeclaration::ExportNamedDeclaration(decl) => {
          (ImportKind::ReExport, decl.span, decl.source.as_ref()?, &decl.with_clause)
        }
        ModuleDeclaration::ExportAllDeclaration(decl) => {
          (ImportKind::ReExport, decl.span, &decl.source, &decl.with_clause)
        }
        _ => return None,
      };
      let end = with_clause.as_ref().map_or(source.span.end, |clause| clause.span.end);
      let span = Span::new(statement.start, end);
      Some(ImportRecord { specifier: source.value.as_str(), kind, span })
    })
  }
}

#[cfg(test)]
mod tests {
  use externals_common::ImportKind;
  use oxc::span::SourceType;

  use crate::module_lexer::ModuleLexer;

  fn scan(source: &str, source_type: SourceType) -> Vec<(String, ImportKind, String)> {
    ModuleLexer::new()
      .scan_with(source, source_type, |records| {
        records
          .map(|record| {
            let statement = record.span.source_text(source).to_string();
            (record.specifier.to_string(), record.kind, statement)
          })
          .collect()
      })
      .unwrap()
  }

  fn js(source: &str) -> Vec<(String, ImportKind, String)> {
    scan(source, SourceType::default().with_module(true).with_jsx(true))
  }

  fn record(specifier: &str, kind: ImportKind, statement: &str) -> (String, ImportKind, String) {
    (specifier.to_string(), kind, statement.to_string())
  }

  #[test]
  fn finds_declarations_in_order() {
    let source = "import Vue from 'vue';\nexport { ref } from \"vue\"\n\
      export * as R from 'react'\nexport const a = 1\nfoo()\n";
    assert_eq!(
      js(source),
      [
        record("vue", ImportKind::Import, "import Vue from 'vue'"),
        record("vue", ImportKind::ReExport, "export { ref } from \"vue\""),
        record("react", ImportKind::ReExport, "export * as R from 'react'"),
      ]
    );
  }

  #[test]
  fn import_attributes_belong_to_the_statement() {
    assert_eq!(
      js("import data from './data.json' with { type: 'json' };"),
      [record(
        "./data.json",
        ImportKind::Import,
        "import data from './data.json' with { type: 'json' }"
      )]
    );
  }

  #[test]
  fn specifiers_are_decoded() {
    assert_eq!(js("import v from '\\u0076ue'")[0].0, "vue");
  }

  #[test]
  fn expressions_are_not_declarations() {
    assert!(js("const vue = await import('vue')").is_empty());
    assert!(js("render(<p>import x from 'vue'</p>, root)").is_empty());
    assert!(js("const s = `import x from 'vue'` // export * from 'vue'").is_empty());
    assert_eq!(js("if (ok) /[{]/.test(s)\nimport V from 'vue'").len(), 1);
  }

  #[test]
  fn type_only_declarations_are_listed() {
    let ts = SourceType::default().with_module(true).with_typescript(true);
    assert_eq!(
      scan("import type { Ref } from 'vue'", ts),
      [record("vue", ImportKind::Import, "import type { Ref } from 'vue'")]
    );
  }
}
