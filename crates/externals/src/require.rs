use std::borrow::Cow;

use externals_common::ExternalsMap;
use oxc::span::Span;
use regex::Regex;

use crate::module_name::ModuleNameResolver;

/// Lexical `require('<external>')` replacement for pre-built dependency code.
///
/// The match is purely textual: a `require('vue')` inside a string literal is replaced too.
#[derive(Debug)]
pub struct RequireRewriter {
  pattern: Option<Regex>,
  /// Resolved expression per external key, in the order of the key's capture group.
  keys: Vec<(String, String)>,
}

impl RequireRewriter {
  pub fn new(externals: &ExternalsMap, resolver: ModuleNameResolver) -> anyhow::Result<Self> {
    let keys = externals
      .iter()
      .map(|(key, value)| (key.to_string(), resolver.resolve(value)))
      .collect::<Vec<_>>();
    if keys.is_empty() {
      return Ok(Self { pattern: None, keys });
    }
    let alternatives =
      keys.iter().map(|(key, _)| regex::escape(key)).collect::<Vec<_>>().join("|");
    // One group per quote kind, because the closing quote has to match the opening one.
    let quoted = |quote: char| format!(r"{quote}\s*({alternatives})\s*{quote}");
    let pattern = Regex::new(&format!(
      r"\brequire\(\s*(?:{}|{}|{})\s*\)",
      quoted('"'),
      quoted('\''),
      quoted('`')
    ))?;
    Ok(Self { pattern: Some(pattern), keys })
  }

  /// Every matched call with the expression that replaces it, in source order.
  pub fn find_iter<'a>(&'a self, code: &'a str) -> impl Iterator<Item = (Span, &'a str)> + 'a {
    self.pattern.iter().flat_map(move |pattern| {
      pattern.captures_iter(code).filter_map(|captures| {
        let whole = captures.get(0)?;
        let key = (1..=3).find_map(|group| captures.get(group))?.as_str();
        let (_, expr) = self.keys.iter().find(|(candidate, _)| candidate == key)?;
        let start = u32::try_from(whole.start()).ok()?;
        let end = u32::try_from(whole.end()).ok()?;
        Some((Span::new(start, end), expr.as_str()))
      })
    })
  }

  pub fn rewrite<'a>(&self, code: &'a str) -> Cow<'a, str> {
    let mut rewritten = String::new();
    let mut last_end = 0;
    for (span, expr) in self.find_iter(code) {
      rewritten.push_str(&code[last_end..span.start as usize]);
      rewritten.push_str(expr);
      last_end = span.end as usize;
    }
    if last_end == 0 {
      return Cow::Borrowed(code);
    }
    rewritten.push_str(&code[last_end..]);
    Cow::Owned(rewritten)
  }
}

/// Replaces every `require('<key>')` of `externals` in `code` with the key's global expression.
pub fn rewrite_requires<'a>(
  code: &'a str,
  externals: &ExternalsMap,
  resolver: ModuleNameResolver,
) -> anyhow::Result<Cow<'a, str>> {
  Ok(RequireRewriter::new(externals, resolver)?.rewrite(code))
}
