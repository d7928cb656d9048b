use oxc::span::SourceType;

/// Source file kinds eligible for rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
  Js,
  Jsx,
  Ts,
  Tsx,
  /// Script blocks of single-file components, which may be written in TypeScript.
  Vue,
}

impl ModuleType {
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext {
      "js" | "mjs" | "cjs" => Some(Self::Js),
      "jsx" => Some(Self::Jsx),
      "ts" | "mts" | "cts" => Some(Self::Ts),
      "tsx" => Some(Self::Tsx),
      "vue" => Some(Self::Vue),
      _ => None,
    }
  }

  /// Source type used to parse the module and its isolated import/export statements. Plain
  /// scripts accept JSX, which is common in `.js` files.
  pub fn source_type(self) -> SourceType {
    let default = SourceType::default().with_module(true);
    match self {
      Self::Js | Self::Jsx => default.with_jsx(true),
      Self::Ts | Self::Vue => default.with_typescript(true),
      Self::Tsx => default.with_typescript(true).with_jsx(true),
    }
  }
}
