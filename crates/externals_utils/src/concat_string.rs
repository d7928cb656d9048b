/// Concatenates string-like values, evaluating every argument exactly once.
#[macro_export]
macro_rules! concat_string {
  () => {
    String::new()
  };
  ($($s:expr),+ $(,)?) => {{
    let mut buf = String::new();
    $(buf.push_str(AsRef::<str>::as_ref(&$s));)+
    buf
  }};
}

#[test]
fn test_concat_string() {
  let expr = String::from("window['Vue']");
  assert_eq!(concat_string!("const Vue = ", expr, "\n"), "const Vue = window['Vue']\n");
  assert_eq!(concat_string!(), "");
}
