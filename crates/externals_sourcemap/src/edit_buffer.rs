use externals_error::ExternalsError;
use oxc::span::Span;
use oxc_sourcemap::SourceMap;
use string_wizard::{Hires, MagicString, SourceMapOptions};

/// Disjoint replacements collected against one immutable source text.
///
/// Edits may be recorded in any order. Applying them produces the new text and a map that
/// points back into the original source.
pub struct EditBuffer<'s> {
  magic_string: MagicString<'s>,
  /// Replaced ranges, sorted by start offset.
  edited: Vec<Span>,
}

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions<'a> {
  /// Recorded in `sources`.
  pub source_name: &'a str,
  pub file: Option<&'a str>,
  /// Map every character of unchanged text instead of only segment and line starts.
  pub hires: bool,
}

#[derive(Debug)]
pub struct EditOutput {
  pub code: String,
  pub map: SourceMap,
}

impl<'s> EditBuffer<'s> {
  pub fn new(source: &'s str) -> Self {
    Self { magic_string: MagicString::new(source), edited: Vec::new() }
  }

  pub fn is_empty(&self) -> bool {
    self.edited.is_empty()
  }

  pub fn len(&self) -> usize {
    self.edited.len()
  }

  /// Replaces the non-empty range `span` of the original text with `content`.
  pub fn overwrite(
    &mut self,
    span: Span,
    content: impl Into<String>,
  ) -> Result<(), ExternalsError> {
    debug_assert!(!span.is_empty());
    let index = self.edited.partition_point(|edited| edited.start <= span.start);
    let overlapping = index
      .checked_sub(1)
      .and_then(|prev| self.edited.get(prev))
      .filter(|prev| prev.end > span.start)
      .or_else(|| self.edited.get(index).filter(|next| next.start < span.end));
    if let Some(other) = overlapping {
      return Err(ExternalsError::OverlappingEdit {
        start: span.start,
        end: span.end,
        previous_end: other.end,
      });
    }
    let content: String = content.into();
    self.magic_string.update(span.start as usize, span.end as usize, content);
    self.edited.insert(index, span);
    Ok(())
  }

  /// Returns `None` when nothing was edited, so callers can keep the original text as is.
  pub fn into_output(self, options: &OutputOptions<'_>) -> Option<EditOutput> {
    if self.edited.is_empty() {
      return None;
    }
    let mut map = self.magic_string.source_map(SourceMapOptions {
      hires: if options.hires { Hires::True } else { Hires::False },
      include_content: true,
      source: options.source_name.into(),
    });
    if let Some(file) = options.file {
      map.set_file(file);
    }
    Some(EditOutput { code: self.magic_string.to_string(), map })
  }
}

#[cfg(test)]
mod tests {
  use oxc::span::Span;

  use super::{EditBuffer, OutputOptions};

  fn tokens(map: &oxc_sourcemap::SourceMap) -> Vec<(u32, u32, u32, u32)> {
    map
      .get_tokens()
      .map(|token| {
        (token.get_dst_line(), token.get_dst_col(), token.get_src_line(), token.get_src_col())
      })
      .collect()
  }

  const OPTIONS: OutputOptions<'static> =
    OutputOptions { source_name: "/src/main.js", file: None, hires: false };

  #[test]
  fn unchanged_without_edits() {
    let buffer = EditBuffer::new("import Vue from 'vue'\n");
    assert!(buffer.is_empty());
    assert!(buffer.into_output(&OPTIONS).is_none());
  }

  #[test]
  fn applies_edits_in_offset_order() {
    let source = "import a from 'a'\nimport b from 'b'\nfoo(a, b)\n";
    let mut buffer = EditBuffer::new(source);
    buffer.overwrite(Span::new(18, 35), "const b = window['B']\n").unwrap();
    buffer.overwrite(Span::new(0, 17), "const a = window['A']\n").unwrap();
    assert_eq!(buffer.len(), 2);
    let output = buffer.into_output(&OPTIONS).unwrap();
    assert_eq!(output.code, "const a = window['A']\n\nconst b = window['B']\n\nfoo(a, b)\n");
    let tokens = tokens(&output.map);
    assert_eq!(tokens.first(), Some(&(0, 0, 0, 0)));
    assert!(tokens.contains(&(2, 0, 1, 0)));
  }

  #[test]
  fn rejects_overlapping_edits() {
    let mut buffer = EditBuffer::new("import Vue from 'vue'");
    buffer.overwrite(Span::new(0, 10), "x").unwrap();
    assert!(buffer.overwrite(Span::new(5, 12), "y").is_err());
    assert!(buffer.overwrite(Span::new(0, 3), "y").is_err());
    buffer.overwrite(Span::new(10, 12), "z").unwrap();
    assert_eq!(buffer.len(), 2);
  }

  #[test]
  fn hires_maps_unchanged_characters() {
    let source = "import Vue from 'vue';Vue";
    let output = |hires: bool| {
      let mut buffer = EditBuffer::new(source);
      buffer.overwrite(Span::new(0, 21), "const Vue = window['Vue']\n").unwrap();
      buffer.into_output(&OutputOptions { hires, file: Some("main.js"), ..OPTIONS }).unwrap()
    };
    let (hires, lowres) = (output(true), output(false));
    assert_eq!(hires.code, "const Vue = window['Vue']\n;Vue");
    assert_eq!(hires.code, lowres.code);
    assert!(tokens(&hires.map).contains(&(1, 0, 0, 21)));
    assert!(tokens(&hires.map).len() > tokens(&lowres.map).len());
    assert_eq!(hires.map.get_file(), Some("main.js"));
  }

  #[test]
  fn embeds_original_source() {
    let source = "export { default } from 'vue'";
    let mut buffer = EditBuffer::new(source);
    buffer.overwrite(Span::new(0, 29), "export default window['Vue']\n").unwrap();
    let output = buffer.into_output(&OPTIONS).unwrap();
    assert_eq!(output.map.get_source(0), Some("/src/main.js"));
    assert_eq!(output.map.get_source_content(0), Some(source));
    assert_eq!(output.map.get_file(), None);
  }
}
