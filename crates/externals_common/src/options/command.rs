/// The host command a compilation session runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Build,
  Serve,
}

impl Command {
  pub fn is_build(self) -> bool {
    matches!(self, Self::Build)
  }
}
