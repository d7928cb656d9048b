use externals_common::ImportKind;
use oxc::span::Span;

/// One static import or re-export declaration of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportRecord<'a> {
  /// Module request with escapes decoded.
  pub specifier: &'a str,
  pub kind: ImportKind,
  /// From the keyword up to the module source, or up to the import attributes if there are
  /// any. A trailing `;` is not included.
  pub span: Span,
}
