/// One binding introduced or re-exported by a single import/export statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
  /// `import Vue from 'vue'`
  Default { local: String },
  /// `import { ref as r } from 'vue'`
  Named { local: String, imported: String },
  /// `import * as vue from 'vue'`
  Namespace { local: String },
  /// `export { ref as r } from 'vue'`, `local` is the name on the source module.
  Reexport { local: String, exported: String },
  /// `export * as vue from 'vue'`
  NamespaceReexport { exported: String },
}

impl Specifier {
  pub fn default_import(local: impl Into<String>) -> Self {
    Self::Default { local: local.into() }
  }

  pub fn named(local: impl Into<String>, imported: impl Into<String>) -> Self {
    Self::Named { local: local.into(), imported: imported.into() }
  }

  pub fn namespace(local: impl Into<String>) -> Self {
    Self::Namespace { local: local.into() }
  }

  pub fn reexport(local: impl Into<String>, exported: impl Into<String>) -> Self {
    Self::Reexport { local: local.into(), exported: exported.into() }
  }

  pub fn namespace_reexport(exported: impl Into<String>) -> Self {
    Self::NamespaceReexport { exported: exported.into() }
  }
}
