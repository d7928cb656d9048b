mod externals_error;

use std::ops::{Deref, DerefMut};

pub use crate::externals_error::ExternalsError;

/// Errors surfaced to the host. Only the configuration hook produces them, the per-module
/// transform is fail-soft and never reports a `BuildError`.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<ExternalsError> for BuildError {
  fn from(error: ExternalsError) -> Self {
    Self(vec![error.into()])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl std::fmt::Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, error) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_display_joins_errors() {
  let error = BuildError::from(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")]);
  assert_eq!(error.to_string(), "first\nsecond");
  assert_eq!(error.len(), 2);
}
