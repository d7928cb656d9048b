use serde::Deserialize;

/// Ordering hint passed through to the host's plugin pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
  Pre,
  Post,
}

impl Enforce {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pre => "pre",
      Self::Post => "post",
    }
  }
}
