use externals_sourcemap::SourceMap;

/// Rewritten module text and the map back to the text the host passed in.
#[derive(Debug)]
pub struct TransformOutput {
  pub code: String,
  pub map: SourceMap,
}
