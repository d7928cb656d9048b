use std::borrow::Cow;

use externals_common::Specifier;
use externals_utils::{concat_string, ecmascript::property_access_str};

/// Renders the bindings of one statement against the resolved global expression, one
/// newline-terminated line per specifier.
pub fn render_specifiers(specifiers: &[Specifier], expr: &str) -> String {
  let mut rendered = String::new();
  for specifier in specifiers {
    let line = match specifier {
      Specifier::Default { local } | Specifier::Namespace { local } => {
        concat_string!("const ", local, " = ", expr)
      }
      Specifier::Named { local, imported } => {
        concat_string!("const ", local, " = ", property_access_str(expr, imported))
      }
      Specifier::Reexport { local, exported } => {
        let value = if local == "default" {
          Cow::Borrowed(expr)
        } else {
          Cow::Owned(property_access_str(expr, local))
        };
        render_export(exported, &value)
      }
      Specifier::NamespaceReexport { exported } => render_export(exported, expr),
    };
    rendered.push_str(&line);
    rendered.push('\n');
  }
  rendered
}

fn render_export(exported: &str, value: &str) -> String {
  if exported == "default" {
    concat_string!("export default ", value)
  } else {
    concat_string!("export const ", exported, " = ", value)
  }
}

#[test]
fn test_import_specifiers() {
  let expr = "window['Vue']";
  assert_eq!(
    render_specifiers(&[Specifier::default_import("Vue")], expr),
    "const Vue = window['Vue']\n"
  );
  assert_eq!(
    render_specifiers(
      &[Specifier::named("reactive", "reactive"), Specifier::named("r", "ref")],
      expr
    ),
    "const reactive = window['Vue'].reactive\nconst r = window['Vue'].ref\n"
  );
  assert_eq!(
    render_specifiers(&[Specifier::namespace("vue")], expr),
    "const vue = window['Vue']\n"
  );
  assert_eq!(
    render_specifiers(&[Specifier::named("ab", "a-b")], expr),
    "const ab = window['Vue'][\"a-b\"]\n"
  );
  assert_eq!(render_specifiers(&[], expr), "");
}

#[test]
fn test_reexport_specifiers() {
  assert_eq!(
    render_specifiers(&[Specifier::reexport("default", "Vue")], "window['Vue']"),
    "export const Vue = window['Vue']\n"
  );
  assert_eq!(
    render_specifiers(&[Specifier::reexport("default", "default")], "window['Vue']"),
    "export default window['Vue']\n"
  );
  assert_eq!(
    render_specifiers(&[Specifier::reexport("useState", "useState2")], "window['React']"),
    "export const useState2 = window['React'].useState\n"
  );
  assert_eq!(
    render_specifiers(&[Specifier::reexport("useState", "default")], "React"),
    "export default React.useState\n"
  );
  assert_eq!(
    render_specifiers(&[Specifier::namespace_reexport("React")], "window['React']"),
    "export const React = window['React']\n"
  );
}
