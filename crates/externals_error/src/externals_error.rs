use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExternalsError {
  /// The isolated text of one import/export statement is not valid on its own.
  #[error("Failed to parse statement `{statement}`: {reason}")]
  StatementParse { statement: String, reason: String },

  /// The module text could not be parsed far enough to list its declarations.
  #[error("Failed to parse module: {reason}")]
  ModuleParse { reason: String },

  /// The statement parsed, but its shape cannot be expressed as global bindings.
  #[error("Cannot rewrite statement `{statement}`: {reason}")]
  UnsupportedStatement { statement: String, reason: String },

  #[error("Edit {start}..{end} overlaps an edit that ends at {previous_end}")]
  OverlappingEdit { start: u32, end: u32, previous_end: u32 },

  #[error("Failed to {action} `{}`", path.display())]
  Filesystem {
    action: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl ExternalsError {
  pub fn statement_parse(statement: impl Into<String>, reason: impl ToString) -> Self {
    Self::StatementParse { statement: statement.into(), reason: reason.to_string() }
  }

  pub fn module_parse(reason: impl ToString) -> Self {
    Self::ModuleParse { reason: reason.to_string() }
  }

  pub fn unsupported_statement(statement: impl Into<String>, reason: impl ToString) -> Self {
    Self::UnsupportedStatement { statement: statement.into(), reason: reason.to_string() }
  }

  pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Filesystem { action, path: path.into(), source }
  }

  /// Statement-level errors are recovered locally by leaving the statement untouched.
  pub fn is_statement_level(&self) -> bool {
    matches!(self, Self::StatementParse { .. } | Self::UnsupportedStatement { .. })
  }
}

#[test]
fn test_filesystem_message() {
  let error = ExternalsError::filesystem(
    "write",
    "/project/node_modules/.plugin-cache/vue.js",
    io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
  );
  assert_eq!(error.to_string(), "Failed to write `/project/node_modules/.plugin-cache/vue.js`");
  assert!(!error.is_statement_level());
  assert!(ExternalsError::statement_parse("import {", "unexpected token").is_statement_level());
  assert!(!ExternalsError::module_parse("unexpected token").is_statement_level());
}
