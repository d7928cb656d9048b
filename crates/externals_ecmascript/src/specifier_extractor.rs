use externals_common::Specifier;
use externals_error::ExternalsError;
use externals_utils::ecmascript::is_validate_identifier_name;
use oxc::{
  ast::ast::{
    ExportAllDeclaration, ExportNamedDeclaration, ImportDeclaration, ImportDeclarationSpecifier,
    ModuleDeclaration,
  },
  span::SourceType,
};

use crate::EcmaCompiler;

/// Parses one isolated import/re-export statement and returns the bindings it introduces.
///
/// Type-only imports and exports produce no bindings. An empty result means there is nothing
/// to rewrite (`import 'vue'`, `export * from 'vue'`, `import type { Ref } from 'vue'`).
pub fn extract_specifiers(
  statement: &str,
  source_type: SourceType,
) -> Result<Vec<Specifier>, ExternalsError> {
  EcmaCompiler::parse_with(statement, source_type, |program| {
    let mut body = program.body.iter();
    let (Some(stmt), None) = (body.next(), body.next()) else {
      return Err(ExternalsError::unsupported_statement(statement, "expected a single statement"));
    };
    match stmt.as_module_declaration() {
      Some(ModuleDeclaration::ImportDeclaration(decl)) => Ok(import_specifiers(decl)),
      Some(ModuleDeclaration::ExportNamedDeclaration(decl)) if decl.source.is_some() => {
        reexport_specifiers(statement, decl)
      }
      Some(ModuleDeclaration::ExportAllDeclaration(decl)) => {
        namespace_reexport_specifiers(statement, decl)
      }
      _ => Err(ExternalsError::unsupported_statement(
        statement,
        "not an import or re-export declaration",
      )),
    }
  })?
}

fn import_specifiers(decl: &ImportDeclaration) -> Vec<Specifier> {
  let mut specifiers = Vec::new();
  if decl.import_kind.is_type() {
    return specifiers;
  }
  let Some(decl_specifiers) = &decl.specifiers else {
    return specifiers;
  };
  for specifier in decl_specifiers {
    match specifier {
      ImportDeclarationSpecifier::ImportSpecifier(spec) => {
        if !spec.import_kind.is_type() {
          let imported = spec.imported.name();
          specifiers.push(Specifier::named(spec.local.name.as_str(), imported.as_str()));
        }
      }
      ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => {
        specifiers.push(Specifier::default_import(spec.local.name.as_str()));
      }
      ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => {
        specifiers.push(Specifier::namespace(spec.local.name.as_str()));
      }
    }
  }
  specifiers
}

fn reexport_specifiers(
  statement: &str,
  decl: &ExportNamedDeclaration,
) -> Result<Vec<Specifier>, ExternalsError> {
  if decl.export_kind.is_type() {
    return Ok(Vec::new());
  }
  decl
    .specifiers
    .iter()
    .filter(|spec| !spec.export_kind.is_type())
    .map(|spec| {
      let exported = spec.exported.name();
      ensure_declarable(statement, exported.as_str())?;
      Ok(Specifier::reexport(spec.local.name().as_str(), exported.as_str()))
    })
    .collect()
}

fn namespace_reexport_specifiers(
  statement: &str,
  decl: &ExportAllDeclaration,
) -> Result<Vec<Specifier>, ExternalsError> {
  // `export * from 'vue'` re-exports names that are unknown without the module itself.
  let Some(exported) = decl.exported.as_ref().filter(|_| !decl.export_kind.is_type()) else {
    return Ok(Vec::new());
  };
  let exported = exported.name();
  ensure_declarable(statement, exported.as_str())?;
  Ok(vec![Specifier::namespace_reexport(exported.as_str())])
}

/// Re-exports become `export const <name> = ..`, which needs an identifier.
fn ensure_declarable(statement: &str, exported: &str) -> Result<(), ExternalsError> {
  if exported == "default" || is_validate_identifier_name(exported) {
    Ok(())
  } else {
    Err(ExternalsError::unsupported_statement(
      statement,
      format!("`{exported}` cannot be declared as a binding"),
    ))
  }
}
